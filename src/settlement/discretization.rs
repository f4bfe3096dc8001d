use crate::settlement::{MAX_SUBLAYERS, SettlementError};
use crate::soil::SoilProfile;
use serde::{Deserialize, Serialize};

/// Relative tolerance when counting whole steps in a layer
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// A thin slice of one layer, represented by its midpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sublayer {
    pub layer_index: usize,
    pub top: f64,
    pub thickness: f64,
}

impl Sublayer {
    pub fn midpoint(&self) -> f64 {
        self.top + 0.5 * self.thickness
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.thickness
    }
}

/// Split one layer `[top, top + thickness]` into sublayers of `step`
///
/// The last sublayer absorbs the remainder when the thickness is not a whole
/// number of steps; a layer thinner than `step` is a single sublayer.
pub fn split_layer(layer_index: usize, top: f64, thickness: f64, step: f64) -> Vec<Sublayer> {
    if thickness <= 0.0 {
        return Vec::new();
    }

    let whole_steps = ((thickness / step) * (1.0 + STEP_COUNT_TOLERANCE)).floor() as usize;
    if whole_steps == 0 {
        return vec![Sublayer {
            layer_index,
            top,
            thickness,
        }];
    }

    (0..whole_steps)
        .map(|i| {
            let sub_top = top + step * i as f64;
            let sub_thickness = if i + 1 == whole_steps {
                (top + thickness) - sub_top
            } else {
                step
            };
            Sublayer {
                layer_index,
                top: sub_top,
                thickness: sub_thickness,
            }
        })
        .collect()
}

/// Sublayers of the whole profile, ordered by depth
pub fn discretize(profile: &SoilProfile, step: f64) -> Result<Vec<Sublayer>, SettlementError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SettlementError::InvalidArgument(format!(
            "sublayer step must be positive, got {step}"
        )));
    }

    let expected = (profile.total_depth() / step).ceil();
    if !expected.is_finite() || expected > MAX_SUBLAYERS as f64 {
        return Err(SettlementError::InvalidArgument(format!(
            "sublayer step {step} m produces more than {MAX_SUBLAYERS} sublayers"
        )));
    }

    Ok(profile
        .layer_bounds()
        .iter()
        .flat_map(|b| split_layer(b.index, b.top, b.thickness(), step))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilLayer;
    use approx::assert_relative_eq;

    fn profile(thicknesses: &[f64]) -> SoilProfile {
        SoilProfile::new(
            thicknesses
                .iter()
                .map(|&z| SoilLayer::new(z, 18.0, 19.0))
                .collect(),
            0.0,
        )
    }

    #[test]
    fn test_exact_multiple() {
        let subs = split_layer(0, 0.0, 4.0, 0.5);
        assert_eq!(subs.len(), 8);
        assert_relative_eq!(subs[0].midpoint(), 0.25);
        assert_relative_eq!(subs[7].midpoint(), 3.75);
        assert!(subs.iter().all(|s| (s.thickness - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_remainder_absorbed_by_last_sublayer() {
        let subs = split_layer(0, 0.0, 1.3, 0.5);
        assert_eq!(subs.len(), 2);
        assert_relative_eq!(subs[0].thickness, 0.5);
        assert_relative_eq!(subs[1].thickness, 0.8, epsilon = 1e-12);
        assert_relative_eq!(subs[1].midpoint(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_inexact_float_multiple() {
        // 0.3 / 0.1 is slightly below 3 in binary
        let subs = split_layer(0, 0.0, 0.3, 0.1);
        assert_eq!(subs.len(), 3);
        assert_relative_eq!(subs[2].bottom(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_thin_layer_is_single_sublayer() {
        let subs = split_layer(1, 2.0, 0.2, 0.5);
        assert_eq!(subs.len(), 1);
        assert_relative_eq!(subs[0].midpoint(), 2.1);
    }

    #[test]
    fn test_profile_is_contiguous() {
        let subs = discretize(&profile(&[1.3, 0.0, 2.0]), 0.5).unwrap();
        assert_eq!(subs.len(), 2 + 4);
        assert!(subs.iter().all(|s| s.layer_index != 1));
        for pair in subs.windows(2) {
            assert_relative_eq!(pair[0].bottom(), pair[1].top, epsilon = 1e-12);
            assert!(pair[1].midpoint() > pair[0].midpoint());
        }
        assert_relative_eq!(subs[2].top, 1.3, epsilon = 1e-12);
        assert_relative_eq!(subs.last().unwrap().bottom(), 3.3, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_step() {
        let p = profile(&[4.0]);
        assert!(matches!(discretize(&p, 0.0), Err(SettlementError::InvalidArgument(_))));
        assert!(discretize(&p, -0.5).is_err());
        assert!(discretize(&p, f64::NAN).is_err());
        assert!(discretize(&p, 1e-9).is_err());
    }
}
