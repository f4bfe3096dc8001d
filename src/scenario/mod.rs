pub mod config;
pub mod export;

pub use config::*;
pub use export::*;

use crate::settlement::SettlementError;
use crate::stress::StressError;
use crate::types::UnitError;

/// Error types for scenario files and exports
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid result file: {0}")]
    InvalidResult(String),

    #[error("Unit conversion error: {0}")]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Stress(#[from] StressError),

    #[error(transparent)]
    Settlement(#[from] SettlementError),
}
