use std::fmt;
use uom::si::{length::meter, pressure::kilopascal};

use crate::types::units::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayLength(pub Length);
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPressure(pub Pressure);
/// Settlement magnitude in millimeters (raw, settlements are not carried as `uom` values)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettlement(pub f64);

impl fmt::Display for DisplayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m", self.0.get::<meter>())
    }
}

impl fmt::Display for DisplayPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kPa", self.0.get::<kilopascal>())
    }
}

impl fmt::Display for DisplaySettlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mm", self.0)
    }
}

impl DisplayLength {
    pub fn meters(value: f64) -> Self {
        Self(Length::new::<meter>(value))
    }
}

impl DisplayPressure {
    pub fn kpa(value: f64) -> Self {
        Self(Pressure::new::<kilopascal>(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(DisplayLength::meters(1.25).to_string(), "1.250 m");
        assert_eq!(DisplayPressure::kpa(99.343).to_string(), "99.34 kPa");
        assert_eq!(DisplaySettlement(46.537).to_string(), "46.54 mm");
    }
}
