use chrono::{Datelike, Duration, Local, NaiveDateTime, Weekday};
use primer_common::{PrimerConfig, Result};

/// Source of the current time for snippets that branch on it.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// The first instant on or after the Unix epoch that falls on `day`.
    pub fn on_weekday(day: Weekday) -> Self {
        let epoch = NaiveDateTime::default();
        let from = epoch.weekday().num_days_from_monday() as i64;
        let to = day.num_days_from_monday() as i64;
        Self(epoch + Duration::days((to - from).rem_euclid(7)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Everything a snippet may read from its surroundings.
pub struct Context {
    clock: Box<dyn Clock>,
}

impl Context {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::new(FixedClock(at))
    }

    /// Build a context honouring the `[clock]` section of the config.
    pub fn from_config(config: &PrimerConfig) -> Result<Self> {
        Ok(match config.weekday()? {
            Some(day) => Self::new(FixedClock::on_weekday(day)),
            None => Self::system(),
        })
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_weekday_lands_on_day() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            let clock = FixedClock::on_weekday(day);
            assert_eq!(clock.now().weekday(), day);
            assert!(clock.now() >= NaiveDateTime::default());
        }
    }

    #[test]
    fn test_from_config() {
        let config = PrimerConfig::from_toml("[clock]\nweekday = \"sun\"").unwrap();
        let ctx = Context::from_config(&config).unwrap();
        assert_eq!(ctx.now().weekday(), Weekday::Sun);
    }
}
