//! One-dimensional primary consolidation of a single sublayer
//!
//! Settlement of a slice of thickness `h` (m) in millimeters:
//! - normally consolidated: `1000 h/(1+e0) · Cc · ln(σf/σi)`
//! - stays below `σp`: `1000 h/(1+e0) · Cs · ln(σf/σi)`
//! - crosses `σp`: `1000 h/(1+e0) · [Cs · ln(σp/σi) + Cc · ln(σf/σp)]`
//!
//! Natural logarithms throughout, matching the indices as supplied.

use crate::soil::SoilLayer;
use serde::{Deserialize, Serialize};

/// Meters to millimeters
const MM_PER_M: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsolidationBranch {
    /// OCR = 1, virgin compression only
    NormallyConsolidated,
    /// OCR > 1 and the final stress stays at or below the preconsolidation stress
    Recompression,
    /// OCR > 1 and the final stress exceeds the preconsolidation stress
    VirginCompression,
}

impl ConsolidationBranch {
    /// Select the compression law; `σf == σp` stays on the recompression line
    pub fn select(ocr: f64, final_stress: f64, preconsolidation_stress: f64) -> Self {
        if ocr == 1.0 {
            ConsolidationBranch::NormallyConsolidated
        } else if final_stress <= preconsolidation_stress {
            ConsolidationBranch::Recompression
        } else {
            ConsolidationBranch::VirginCompression
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsolidationBranch::NormallyConsolidated => "NC",
            ConsolidationBranch::Recompression => "OC",
            ConsolidationBranch::VirginCompression => "OC-NC",
        }
    }
}

/// Settlement contribution of one sublayer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SublayerSettlement {
    pub branch: ConsolidationBranch,
    pub preconsolidation_stress: f64,
    /// Millimeters
    pub settlement: f64,
}

/// Consolidation settlement (mm) of a slice of `layer` with thickness `h`
///
/// Stresses are in kPa and must be positive; the integrator checks this
/// before calling.
pub fn consolidation_settlement(
    layer: &SoilLayer,
    h: f64,
    initial_stress: f64,
    final_stress: f64,
) -> SublayerSettlement {
    let preconsolidation_stress = layer.ocr * initial_stress;
    let branch = ConsolidationBranch::select(layer.ocr, final_stress, preconsolidation_stress);
    let scale = MM_PER_M * h / (1.0 + layer.void_ratio);

    let strain_term = match branch {
        ConsolidationBranch::NormallyConsolidated => {
            layer.compression_index * (final_stress / initial_stress).ln()
        }
        ConsolidationBranch::Recompression => {
            layer.swelling_index * (final_stress / initial_stress).ln()
        }
        ConsolidationBranch::VirginCompression => {
            layer.swelling_index * (preconsolidation_stress / initial_stress).ln()
                + layer.compression_index * (final_stress / preconsolidation_stress).ln()
        }
    };

    SublayerSettlement {
        branch,
        preconsolidation_stress,
        settlement: scale * strain_term,
    }
}
