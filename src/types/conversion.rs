//! Section coordinates
//!
//! The vertical cross-section through the footing is a 2-D plane:
//! - **x**: lateral offset along the footing width (m)
//! - **y**: depth below the ground surface (m, positive down)
//!
//! Public APIs accept UOM lengths and convert here; internally points are
//! plain `na::Point2<f64>` in **meters**.

use nalgebra as na;
use uom::si::{f64::Length, length::meter};

/// Convert UOM Length to internal coordinate (meters)
#[inline]
pub fn to_coord(length: Length) -> f64 {
    length.get::<meter>()
}

/// Convert internal coordinate (meters) to UOM Length
#[inline]
pub fn from_coord(value: f64) -> Length {
    Length::new::<meter>(value)
}

/// Create a section point from a lateral offset and a depth
pub fn section_point(offset: Length, depth: Length) -> na::Point2<f64> {
    na::Point2::new(to_coord(offset), to_coord(depth))
}

/// Lateral offset of a section point
pub fn offset_length(point: &na::Point2<f64>) -> Length {
    from_coord(point.x)
}

/// Depth of a section point
pub fn depth_length(point: &na::Point2<f64>) -> Length {
    from_coord(point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    #[test]
    fn test_section_point_round_trip() {
        let p = section_point(Length::new::<meter>(6.0), Length::new::<centimeter>(150.0));
        assert_relative_eq!(p.x, 6.0);
        assert_relative_eq!(p.y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(depth_length(&p).get::<meter>(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(offset_length(&p).get::<meter>(), 6.0);
    }
}
