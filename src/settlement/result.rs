use crate::settlement::ConsolidationBranch;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Derived quantities at one sublayer midpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthPoint {
    /// Midpoint depth (m)
    pub depth: f64,

    /// Sublayer thickness (m)
    pub thickness: f64,

    pub layer_index: usize,

    /// Δσ from the footing (kPa)
    pub stress_increment: f64,

    /// σi before loading (kPa)
    pub initial_stress: f64,

    /// σf = σi + Δσ (kPa)
    pub final_stress: f64,

    /// σp = OCR · σi (kPa)
    pub preconsolidation_stress: f64,

    pub branch: ConsolidationBranch,

    /// Δρ of this sublayer (mm)
    pub incremental_settlement: f64,

    /// ρ down to and including this sublayer (mm)
    pub cumulative_settlement: f64,
}

/// Output of one evaluation at a given sublayer step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Sublayer step used (m)
    pub step: f64,

    /// Number of layers in the evaluated profile, absent ones included
    pub layer_count: usize,

    /// Points in increasing depth order
    pub points: Vec<DepthPoint>,

    /// Total settlement under the footing center (mm)
    pub total_settlement: f64,
}

impl EvaluationResult {
    pub fn depths(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.depth).collect()
    }

    pub fn stress_increments(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.stress_increment).collect()
    }

    pub fn initial_stresses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.initial_stress).collect()
    }

    pub fn final_stresses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.final_stress).collect()
    }

    pub fn incremental_settlements(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.incremental_settlement).collect()
    }

    pub fn cumulative_settlements(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.cumulative_settlement).collect()
    }

    /// Settlement contributed by each layer (mm), indexed like the profile
    ///
    /// Grows past `layer_count` when a point names a deeper layer, as in a
    /// hand-edited result file.
    pub fn settlement_per_layer(&self) -> Vec<f64> {
        let len = self
            .points
            .iter()
            .map(|p| p.layer_index.saturating_add(1))
            .fold(self.layer_count, usize::max);
        let mut per_layer = vec![0.0; len];
        for point in &self.points {
            per_layer[point.layer_index] += point.incremental_settlement;
        }
        per_layer
    }

    /// Largest stress increment (kPa), at the shallowest point
    pub fn max_stress_increment(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.stress_increment)
            .fold(0.0, f64::max)
    }

    pub fn total_settlement_display(&self) -> DisplaySettlement {
        DisplaySettlement(self.total_settlement)
    }

    /// Format results for display
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str("Settlement Analysis:\n");
        s.push_str(&format!(
            " Sublayer step: {} ({} sublayers)\n",
            DisplayLength::meters(self.step),
            self.points.len()
        ));
        s.push_str(&format!(
            " Max stress increment: {}\n",
            DisplayPressure::kpa(self.max_stress_increment())
        ));
        s.push_str(&format!(
            "\nTotal settlement under the footing center = {}\n",
            self.total_settlement_display()
        ));

        s.push_str("\nPer layer:\n");
        for (i, settlement) in self.settlement_per_layer().iter().enumerate() {
            s.push_str(&format!(" Layer {}: {}\n", i + 1, DisplaySettlement(*settlement)));
        }
        s
    }
}

/// The same profile evaluated at a caller step and at a fine reference step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepComparison {
    pub coarse: EvaluationResult,
    pub reference: EvaluationResult,
}

impl StepComparison {
    /// Reference total minus coarse total (mm)
    pub fn difference(&self) -> f64 {
        self.reference.total_settlement - self.coarse.total_settlement
    }

    /// Difference as a fraction of the reference total; zero for a zero reference
    pub fn relative_difference(&self) -> f64 {
        if self.reference.total_settlement == 0.0 {
            return 0.0;
        }
        self.difference() / self.reference.total_settlement
    }

    pub fn summary(&self) -> String {
        format!(
            "Total settlement: {} at {} step, {} at {} step (difference {}, {:.2}%)\n",
            DisplaySettlement(self.coarse.total_settlement),
            DisplayLength::meters(self.coarse.step),
            DisplaySettlement(self.reference.total_settlement),
            DisplayLength::meters(self.reference.step),
            DisplaySettlement(self.difference()),
            100.0 * self.relative_difference(),
        )
    }
}
