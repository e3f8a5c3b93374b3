//! Error types shared by the primer crates.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for primer operations.
pub type Result<T> = std::result::Result<T, PrimerError>;

/// Errors that can occur while selecting, configuring or running snippets.
#[derive(Error, Debug, Diagnostic)]
pub enum PrimerError {
    /// A topic name that matches no snippet.
    #[error("Unknown topic: {name}")]
    #[diagnostic(code(primer::unknown_topic), help("valid topics: {valid}"))]
    UnknownTopic { name: String, valid: String },

    /// Failed to read configuration file.
    #[error("Failed to read config file: {0}")]
    #[diagnostic(code(primer::config::read))]
    ReadConfig(#[source] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    #[diagnostic(code(primer::config::parse))]
    ParseToml(#[from] toml::de::Error),

    /// Configuration validation error.
    #[error("Config validation error: {0}")]
    #[diagnostic(code(primer::config::invalid))]
    Validation(String),

    /// Failed to write a transcript.
    #[error("Failed to write output: {0}")]
    #[diagnostic(code(primer::output))]
    Output(#[source] std::io::Error),
}

impl PrimerError {
    pub fn unknown_topic(name: impl Into<String>) -> Self {
        Self::UnknownTopic {
            name: name.into(),
            valid: crate::Topic::ALL
                .iter()
                .map(|t| t.slug())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
