pub mod conversion;
pub mod units;

pub use conversion::*;
pub use units::*;

// Re-export nalgebra
pub use nalgebra as na;

/// Internal standard: meters
pub const INTERNAL_LENGTH_UNIT: &str = "meters";
/// Internal standard: kilopascals
pub const INTERNAL_STRESS_UNIT: &str = "kPa";
/// Internal standard: kilonewtons per cubic meter
pub const INTERNAL_UNIT_WEIGHT_UNIT: &str = "kN/m³";
/// Settlements are reported in millimeters
pub const INTERNAL_SETTLEMENT_UNIT: &str = "mm";
