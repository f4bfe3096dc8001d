pub mod discretization;
pub mod consolidation;
pub mod integrator;
pub mod result;

pub use discretization::*;
pub use consolidation::*;
pub use integrator::*;
pub use result::*;

use crate::soil::SoilError;
use crate::stress::StressError;
use crate::types::DisplayLength;

/// Fine sublayer step used for the reference computation (m)
pub const DEFAULT_REFERENCE_STEP: f64 = 0.05;

/// Upper bound on sublayers in one evaluation
pub const MAX_SUBLAYERS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettlementError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state at depth {depth}: {reason}")]
    InvalidState { depth: DisplayLength, reason: String },

    #[error(transparent)]
    Stress(#[from] StressError),

    #[error(transparent)]
    Soil(#[from] SoilError),
}

/// Coarse failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before computation
    InvalidArgument,
    /// Aborted mid-computation
    InvalidState,
}

impl SettlementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettlementError::InvalidState { .. } => ErrorKind::InvalidState,
            SettlementError::InvalidArgument(_)
            | SettlementError::Stress(_)
            | SettlementError::Soil(_) => ErrorKind::InvalidArgument,
        }
    }
}
