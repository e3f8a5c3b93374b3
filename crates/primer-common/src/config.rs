//! Session configuration types (primer.toml format).

use crate::error::{PrimerError, Result};
use crate::topic::Topic;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimerConfig {
    /// Which snippets to run and how to present them.
    #[serde(default)]
    pub session: SessionConfig,

    /// Clock used by time-dependent snippets.
    #[serde(default)]
    pub clock: ClockConfig,
}

/// Snippet selection and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Topics to run (slug, number or `NN_slug`). Empty means all.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Print a `== NN slug ==` banner above each transcript.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_banner() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            banner: default_banner(),
        }
    }
}

/// Clock configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Pin the weekday (e.g. "sat", "Monday"). Unset means the system clock.
    #[serde(default)]
    pub weekday: Option<String>,
}

impl PrimerConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(PrimerError::ReadConfig)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PrimerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every topic and the pinned weekday parse.
    pub fn validate(&self) -> Result<()> {
        self.topics()?;
        self.weekday()?;
        Ok(())
    }

    /// Configured topics in the order given, or every topic when none are listed.
    pub fn topics(&self) -> Result<Vec<Topic>> {
        if self.session.topics.is_empty() {
            return Ok(Topic::ALL.to_vec());
        }
        self.session.topics.iter().map(|t| t.parse()).collect()
    }

    pub fn weekday(&self) -> Result<Option<Weekday>> {
        self.clock
            .weekday
            .as_deref()
            .map(|day| {
                day.parse::<Weekday>()
                    .map_err(|_| PrimerError::Validation(format!("not a weekday: {day:?}")))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[session]
topics = ["loops", "14", "17_embedding"]
banner = false

[clock]
weekday = "sat"
        "#;

        let config = PrimerConfig::from_toml(toml).unwrap();

        assert!(!config.session.banner);
        assert_eq!(
            config.topics().unwrap(),
            vec![Topic::Loops, Topic::Closures, Topic::Embedding]
        );
        assert_eq!(config.weekday().unwrap(), Some(Weekday::Sat));
    }

    #[test]
    fn test_empty_config_defaults() {
        let config = PrimerConfig::from_toml("").unwrap();

        assert_eq!(config, PrimerConfig::default());
        assert!(config.session.banner);
        assert_eq!(config.topics().unwrap().len(), Topic::ALL.len());
        assert_eq!(config.weekday().unwrap(), None);
    }

    #[test]
    fn test_rejects_unknown_topic() {
        let err = PrimerConfig::from_toml("[session]\ntopics = [\"generics\"]").unwrap_err();
        assert!(matches!(err, PrimerError::UnknownTopic { .. }));
    }

    #[test]
    fn test_rejects_bad_weekday() {
        let err = PrimerConfig::from_toml("[clock]\nweekday = \"someday\"").unwrap_err();
        assert!(matches!(err, PrimerError::Validation(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = PrimerConfig::from_toml("[session\n").unwrap_err();
        assert!(matches!(err, PrimerError::ParseToml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[clock]\nweekday = \"Monday\"").unwrap();

        let config = PrimerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.weekday().unwrap(), Some(Weekday::Mon));
    }

    #[test]
    fn test_missing_file() {
        let err = PrimerConfig::from_file(Path::new("/nonexistent/primer.toml")).unwrap_err();
        assert!(matches!(err, PrimerError::ReadConfig(_)));
    }
}
