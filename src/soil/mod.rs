pub mod layer;
pub mod profile;
pub mod presets;

pub use layer::*;
pub use profile::*;

/// Unit weight of water (kN/m³)
pub const GAMMA_WATER: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SoilError {
    #[error("Invalid layer {index}: {reason}")]
    InvalidLayer { index: usize, reason: String },

    #[error("Invalid soil profile: {0}")]
    InvalidProfile(String),
}
