//! Layered settlement under the footing center
//!
//! Each evaluation is a pure function of its inputs: discretize the profile,
//! then walk the sublayers top-down computing σi, Δσ, σf, σp and Δρ, and
//! accumulate ρ. Sublayers must be visited in increasing depth because σi
//! carries forward the overburden of every shallower layer.

use crate::foundation::FoundationGeometry;
use crate::settlement::*;
use crate::soil::{SoilLayer, SoilProfile};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Footing plus soil profile, evaluated on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementAnalysis {
    pub footing: FoundationGeometry,
    pub profile: SoilProfile,
}

impl SettlementAnalysis {
    pub fn new(footing: FoundationGeometry, profile: SoilProfile) -> Self {
        Self { footing, profile }
    }

    /// Settlement profile and total for sublayers of thickness `step` (m)
    pub fn evaluate(&self, step: f64) -> Result<EvaluationResult, SettlementError> {
        self.footing.validate()?;
        self.profile.validate()?;

        let sublayers = discretize(&self.profile, step)?;
        let layer_top_stress = self.layer_top_stresses();
        let bounds = self.profile.layer_bounds();
        let water_table = self.profile.water_table;

        tracing::debug!(
            step,
            layers = self.profile.layers.len(),
            sublayers = sublayers.len(),
            water_table,
            "evaluating settlement profile"
        );

        let mut points = Vec::with_capacity(sublayers.len());
        let mut cumulative = 0.0;

        for sublayer in &sublayers {
            let index = sublayer.layer_index;
            let layer = &self.profile.layers[index];
            let depth = sublayer.midpoint();

            let initial_stress = layer_top_stress[index]
                + layer.overburden_between(bounds[index].top, depth, water_table);
            check_stress(depth, "initial effective stress", initial_stress)?;

            let stress_increment = self.footing.stress_increment_at(depth)?;
            let final_stress = initial_stress + stress_increment;
            check_stress(depth, "final effective stress", final_stress)?;

            let slice = consolidation_settlement(layer, sublayer.thickness, initial_stress, final_stress);
            if !slice.settlement.is_finite() {
                return Err(SettlementError::InvalidState {
                    depth: DisplayLength::meters(depth),
                    reason: format!("non-finite settlement {}", slice.settlement),
                });
            }
            cumulative += slice.settlement;

            tracing::trace!(
                depth,
                layer = index,
                initial_stress,
                stress_increment,
                branch = slice.branch.label(),
                settlement = slice.settlement,
                "sublayer"
            );

            points.push(DepthPoint {
                depth,
                thickness: sublayer.thickness,
                layer_index: index,
                stress_increment,
                initial_stress,
                final_stress,
                preconsolidation_stress: slice.preconsolidation_stress,
                branch: slice.branch,
                incremental_settlement: slice.settlement,
                cumulative_settlement: cumulative,
            });
        }

        let total_settlement = points.last().map_or(0.0, |p| p.cumulative_settlement);
        tracing::debug!(step, total_settlement, "settlement evaluated");

        Ok(EvaluationResult {
            step,
            layer_count: self.profile.layers.len(),
            points,
            total_settlement,
        })
    }

    /// Evaluate at `step` and at a fine `reference_step` for discretization sensitivity
    pub fn evaluate_with_reference(
        &self,
        step: f64,
        reference_step: f64,
    ) -> Result<StepComparison, SettlementError> {
        Ok(StepComparison {
            coarse: self.evaluate(step)?,
            reference: self.evaluate(reference_step)?,
        })
    }

    /// Evaluate at `step` and at [`DEFAULT_REFERENCE_STEP`]
    pub fn evaluate_with_default_reference(&self, step: f64) -> Result<StepComparison, SettlementError> {
        self.evaluate_with_reference(step, DEFAULT_REFERENCE_STEP)
    }

    /// Effective stress at the top of every layer, carried forward layer by layer
    fn layer_top_stresses(&self) -> Vec<f64> {
        let water_table = self.profile.water_table;
        let mut stress = 0.0;
        self.profile
            .layer_bounds()
            .iter()
            .map(|b| {
                let top = stress;
                stress += self.profile.layers[b.index].overburden_between(b.top, b.bottom, water_table);
                top
            })
            .collect()
    }
}

fn check_stress(depth: f64, label: &str, stress: f64) -> Result<(), SettlementError> {
    if !stress.is_finite() || stress <= 0.0 {
        return Err(SettlementError::InvalidState {
            depth: DisplayLength::meters(depth),
            reason: format!("{label} must be positive, got {}", DisplayPressure::kpa(stress)),
        });
    }
    Ok(())
}

/// Evaluate one footing on a layered profile
pub fn evaluate(
    footing: &FoundationGeometry,
    layers: &[SoilLayer],
    water_table: f64,
    step: f64,
) -> Result<EvaluationResult, SettlementError> {
    SettlementAnalysis::new(*footing, SoilProfile::new(layers.to_vec(), water_table)).evaluate(step)
}
