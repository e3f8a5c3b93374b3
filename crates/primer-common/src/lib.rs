mod config;
mod error;
mod topic;
mod transcript;

pub use config::{ClockConfig, PrimerConfig, SessionConfig};
pub use error::{PrimerError, Result};
pub use topic::Topic;
pub use transcript::Transcript;
