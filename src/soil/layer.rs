use crate::soil::{GAMMA_WATER, SoilError};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// One soil stratum with its unit weights and one-dimensional compressibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilLayer {
    /// Optional label used in reports
    #[serde(default)]
    pub name: Option<String>,

    /// Thickness (m); zero means the layer is absent
    pub thickness: f64,

    /// Dry unit weight, used above the water table (kN/m³)
    pub dry_unit_weight: f64,

    /// Saturated unit weight (kN/m³)
    pub saturated_unit_weight: f64,

    /// Compression index `C_c`
    pub compression_index: f64,

    /// Swelling / recompression index `C_s`
    pub swelling_index: f64,

    /// Initial void ratio `e_0`
    pub void_ratio: f64,

    /// Over-consolidation ratio
    pub ocr: f64,
}

impl SoilLayer {
    /// Normally consolidated layer with default clay-like indices (`Cc = 0.1`, `Cs = 0.05`, `e0 = 1`)
    ///
    /// Chain [`with_compression`](Self::with_compression) and
    /// [`with_ocr`](Self::with_ocr) to set the consolidation parameters.
    pub fn new(thickness: f64, dry_unit_weight: f64, saturated_unit_weight: f64) -> Self {
        Self {
            name: None,
            thickness,
            dry_unit_weight,
            saturated_unit_weight,
            compression_index: 0.1,
            swelling_index: 0.05,
            void_ratio: 1.0,
            ocr: 1.0,
        }
    }

    /// Create a layer with a UOM thickness
    pub fn with_thickness(thickness: Length, dry_unit_weight: f64, saturated_unit_weight: f64) -> Self {
        Self::new(to_coord(thickness), dry_unit_weight, saturated_unit_weight)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_compression(mut self, compression_index: f64, swelling_index: f64, void_ratio: f64) -> Self {
        self.compression_index = compression_index;
        self.swelling_index = swelling_index;
        self.void_ratio = void_ratio;
        self
    }

    pub fn with_ocr(mut self, ocr: f64) -> Self {
        self.ocr = ocr;
        self
    }

    pub fn thickness_length(&self) -> Length {
        from_coord(self.thickness)
    }

    /// Submerged unit weight `γ′ = γ_sat − γ_w` (kN/m³)
    pub fn submerged_unit_weight(&self) -> f64 {
        self.saturated_unit_weight - GAMMA_WATER
    }

    pub fn is_normally_consolidated(&self) -> bool {
        self.ocr == 1.0
    }

    /// Effective overburden (kPa) added by this layer between depths `from` and `to`
    ///
    /// The part above the water table weighs `γ_dry`, the part below weighs
    /// `γ_sat − γ_w`. Depths are absolute (from the ground surface).
    pub fn overburden_between(&self, from: f64, to: f64, water_table: f64) -> f64 {
        let dry = (to.min(water_table) - from).max(0.0);
        let submerged = (to - from.max(water_table)).max(0.0);
        dry * self.dry_unit_weight + submerged * self.submerged_unit_weight()
    }

    /// Reject layers that cannot produce a physical consolidation result
    pub fn validate(&self, index: usize) -> Result<(), SoilError> {
        let invalid = |reason: String| SoilError::InvalidLayer { index, reason };

        let fields = [
            ("thickness", self.thickness),
            ("dry unit weight", self.dry_unit_weight),
            ("saturated unit weight", self.saturated_unit_weight),
            ("compression index", self.compression_index),
            ("swelling index", self.swelling_index),
            ("void ratio", self.void_ratio),
            ("OCR", self.ocr),
        ];
        if let Some((label, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(format!("{label} must be finite, got {value}")));
        }

        if self.thickness < 0.0 {
            return Err(invalid(format!(
                "thickness must be non-negative, got {}",
                DisplayLength::meters(self.thickness)
            )));
        }
        if self.dry_unit_weight <= 0.0 || self.saturated_unit_weight <= 0.0 {
            return Err(invalid(format!(
                "unit weights must be positive, got γd = {} and γsat = {} kN/m³",
                self.dry_unit_weight, self.saturated_unit_weight
            )));
        }
        if self.compression_index <= 0.0 {
            return Err(invalid(format!(
                "compression index must be positive, got {}",
                self.compression_index
            )));
        }
        if self.swelling_index <= 0.0 {
            return Err(invalid(format!(
                "swelling index must be positive, got {}",
                self.swelling_index
            )));
        }
        if self.void_ratio <= 0.0 {
            return Err(invalid(format!(
                "initial void ratio must be positive, got {}",
                self.void_ratio
            )));
        }
        if self.ocr < 1.0 {
            return Err(invalid(format!("OCR must be at least 1, got {}", self.ocr)));
        }
        Ok(())
    }
}
