//! Boussinesq vertical stress beneath a uniformly loaded rectangle
//!
//! The closed-form factor `I(m, n, z)` gives the stress fraction under a
//! **corner** of an `m x n` rectangle at depth `z`. Any other point is
//! obtained by superposing corner rectangles that meet at that point.

use std::f64::consts::PI;

use crate::foundation::FoundationGeometry;
use crate::stress::StressError;

/// Corner influence factor of an `m x n` rectangle at depth `z`
///
/// Degenerate rectangles (`m <= 0` or `n <= 0`) carry no load and return 0.
/// At `z = 0` the arctangent saturates and the factor is the surface limit 1/4.
pub fn corner_influence_factor(m: f64, n: f64, z: f64) -> f64 {
    if m <= 0.0 || n <= 0.0 {
        return 0.0;
    }

    let m2 = m * m;
    let n2 = n * n;
    let z2 = z * z;
    let r = (m2 + n2 + z2).sqrt();

    let angle = (m * n / (r * z)).atan();
    let ratio = (m * n * z / r) * (1.0 / (m2 + z2) + 1.0 / (n2 + z2));

    (angle + ratio) / (2.0 * PI)
}

/// Influence factor at depth `z` under the center of an `a x b` rectangle
///
/// Four identical quarter rectangles meet at the center. Negative values
/// (floating point artifacts) are clamped to zero.
pub fn center_influence_factor(a: f64, b: f64, z: f64) -> f64 {
    let factor = 4.0 * corner_influence_factor(a / 2.0, b / 2.0, z);
    if factor < 0.0 {
        tracing::warn!(a, b, z, factor, "negative center influence factor clamped to zero");
        return 0.0;
    }
    factor
}

/// Vertical stress increment (kPa) at `depth` under the footing center
///
/// `depth` must be strictly positive: callers evaluating at the surface pass
/// the first sublayer midpoint instead.
pub fn stress_increment(a: f64, b: f64, q: f64, depth: f64) -> Result<f64, StressError> {
    if !a.is_finite() || a <= 0.0 {
        return Err(StressError::InvalidArgument(format!(
            "footing width must be positive, got {a}"
        )));
    }
    if !b.is_finite() || b <= 0.0 {
        return Err(StressError::InvalidArgument(format!(
            "footing length must be positive, got {b}"
        )));
    }
    if !q.is_finite() || q < 0.0 {
        return Err(StressError::InvalidArgument(format!(
            "contact pressure must be non-negative, got {q}"
        )));
    }
    if !depth.is_finite() || depth <= 0.0 {
        return Err(StressError::InvalidArgument(format!(
            "evaluation depth must be positive, got {depth}"
        )));
    }

    Ok(center_influence_factor(a, b, depth) * q)
}

impl FoundationGeometry {
    /// Stress increment (kPa) under the footing center at `depth`
    pub fn stress_increment_at(&self, depth: f64) -> Result<f64, StressError> {
        stress_increment(self.width, self.length, self.pressure, depth)
    }
}

/// Center-line stress increments for a set of depths
pub fn stress_profile(
    footing: &FoundationGeometry,
    depths: &[f64],
) -> Result<Vec<f64>, StressError> {
    depths
        .iter()
        .map(|&depth| footing.stress_increment_at(depth))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_surface_limit() {
        assert_relative_eq!(corner_influence_factor(2.0, 1.0, 0.0), 0.25);
        assert_relative_eq!(center_influence_factor(4.0, 2.0, 0.0), 1.0);
        assert_eq!(corner_influence_factor(0.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_known_increments() {
        // 4 x 2 m footing, 100 kPa
        let at_quarter = stress_increment(4.0, 2.0, 100.0, 0.25).unwrap();
        assert_relative_eq!(at_quarter, 99.343245878193, epsilon = 1e-9);

        let at_one = stress_increment(4.0, 2.0, 100.0, 1.0).unwrap();
        assert_relative_eq!(at_one, 79.97642903934073, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_pressure_gives_zero() {
        assert_eq!(stress_increment(4.0, 2.0, 0.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            stress_increment(0.0, 2.0, 100.0, 1.0),
            Err(StressError::InvalidArgument(_))
        ));
        assert!(stress_increment(4.0, -2.0, 100.0, 1.0).is_err());
        assert!(stress_increment(4.0, 2.0, -1.0, 1.0).is_err());
        assert!(stress_increment(4.0, 2.0, 100.0, 0.0).is_err());
        assert!(stress_increment(4.0, 2.0, 100.0, -0.5).is_err());
    }

    #[test]
    fn test_vanishes_at_depth() {
        let deep = stress_increment(4.0, 2.0, 100.0, 1.0e4).unwrap();
        assert!(deep < 1.0e-4);
    }

    #[test]
    fn test_stress_profile() {
        let footing = FoundationGeometry::new_si(4.0, 2.0, 100.0);
        let profile = stress_profile(&footing, &[0.25, 1.0]).unwrap();
        assert_eq!(profile.len(), 2);
        assert!(profile[0] > profile[1]);
        assert!(stress_profile(&footing, &[0.5, 0.0]).is_err());
    }

    proptest! {
        /// Property: the increment is non-negative and never exceeds the contact pressure
        #[test]
        fn increment_is_bounded(
            a in 0.1f64..20.0,
            ratio in 0.05f64..1.0,
            q in 0.0f64..1000.0,
            depth in 0.01f64..100.0,
        ) {
            let b = a * ratio;
            let value = stress_increment(a, b, q, depth).unwrap();
            prop_assert!(value >= 0.0);
            prop_assert!(value <= q * (1.0 + 1e-12));
        }

        /// Property: the increment never grows with depth
        #[test]
        fn increment_decays_with_depth(
            a in 0.1f64..20.0,
            ratio in 0.05f64..1.0,
            q in 1.0f64..1000.0,
            depth in 0.01f64..50.0,
            extra in 0.001f64..50.0,
        ) {
            let b = a * ratio;
            let shallow = stress_increment(a, b, q, depth).unwrap();
            let deep = stress_increment(a, b, q, depth + extra).unwrap();
            prop_assert!(deep <= shallow + 1e-9);
        }
    }
}
