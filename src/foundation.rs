//! Rectangular surface footing
//!
//! `a` is the footing width and `b` its length, both in meters; `q` is the
//! uniform contact pressure in kPa. The core works with `b <= a` but does not
//! reject `b > a`: input boundaries call [`FoundationGeometry::clamped`].

use crate::stress::StressError;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoundationGeometry {
    /// Width `a` (m)
    pub width: f64,

    /// Length `b` (m)
    pub length: f64,

    /// Uniform contact pressure `q` (kPa)
    pub pressure: f64,
}

impl FoundationGeometry {
    /// Create a footing from UOM quantities
    pub fn new(width: Length, length: Length, pressure: Pressure) -> Self {
        Self::new_si(
            to_coord(width),
            to_coord(length),
            pressure.get::<kilopascal>(),
        )
    }

    /// Create a footing from raw SI values (m, m, kPa)
    pub fn new_si(width: f64, length: f64, pressure: f64) -> Self {
        Self {
            width,
            length,
            pressure,
        }
    }

    /// Create a footing with the length clamped so that `b <= a`
    pub fn clamped(width: f64, length: f64, pressure: f64) -> Self {
        Self::new_si(width, length.min(width), pressure)
    }

    pub fn width_length(&self) -> Length {
        from_coord(self.width)
    }

    pub fn length_length(&self) -> Length {
        from_coord(self.length)
    }

    pub fn contact_pressure(&self) -> Pressure {
        Pressure::new::<kilopascal>(self.pressure)
    }

    /// Half dimensions `(a/2, b/2)` of the quarter rectangles meeting at the center
    pub fn half_dimensions(&self) -> (f64, f64) {
        (self.width / 2.0, self.length / 2.0)
    }

    /// Plan area (m²)
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Total applied load (kN)
    pub fn total_load(&self) -> f64 {
        self.area() * self.pressure
    }

    pub fn validate(&self) -> Result<(), StressError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(StressError::InvalidArgument(format!(
                "footing width must be positive, got {}",
                self.width
            )));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(StressError::InvalidArgument(format!(
                "footing length must be positive, got {}",
                self.length
            )));
        }
        if !self.pressure.is_finite() || self.pressure < 0.0 {
            return Err(StressError::InvalidArgument(format!(
                "contact pressure must be non-negative, got {}",
                DisplayPressure::kpa(self.pressure)
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uom_constructor() {
        let footing = FoundationGeometry::new(
            Length::new::<meter>(4.0),
            Length::new::<centimeter>(200.0),
            Pressure::new::<kilopascal>(100.0),
        );
        assert_relative_eq!(footing.width, 4.0);
        assert_relative_eq!(footing.length, 2.0, epsilon = 1e-12);
        assert_relative_eq!(footing.pressure, 100.0, epsilon = 1e-12);
        assert_relative_eq!(footing.total_load(), 800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_clamped_length() {
        let footing = FoundationGeometry::clamped(3.0, 4.5, 100.0);
        assert_relative_eq!(footing.length, 3.0);

        let footing = FoundationGeometry::clamped(3.0, 1.5, 100.0);
        assert_relative_eq!(footing.length, 1.5);
        assert_eq!(footing.half_dimensions(), (1.5, 0.75));
    }

    #[test]
    fn test_validation() {
        assert!(FoundationGeometry::new_si(4.0, 2.0, 0.0).validate().is_ok());
        assert!(FoundationGeometry::new_si(0.0, 2.0, 100.0).validate().is_err());
        assert!(FoundationGeometry::new_si(4.0, -1.0, 100.0).validate().is_err());
        assert!(FoundationGeometry::new_si(4.0, 2.0, -5.0).validate().is_err());
        assert!(FoundationGeometry::new_si(f64::NAN, 2.0, 100.0).validate().is_err());
    }
}
