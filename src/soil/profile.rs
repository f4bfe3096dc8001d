use crate::soil::{SoilError, SoilLayer};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Ordered, contiguous layers below the ground surface plus a single water table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    pub layers: Vec<SoilLayer>,

    /// Water table depth below the surface (m)
    pub water_table: f64,
}

/// Depth interval occupied by one layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerBounds {
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
}

impl LayerBounds {
    pub fn thickness(&self) -> f64 {
        self.bottom - self.top
    }
}

impl SoilProfile {
    pub fn new(layers: Vec<SoilLayer>, water_table: f64) -> Self {
        Self {
            layers,
            water_table,
        }
    }

    pub fn with_water_table_length(layers: Vec<SoilLayer>, water_table: Length) -> Self {
        Self::new(layers, to_coord(water_table))
    }

    pub fn add_layer(&mut self, layer: SoilLayer) {
        self.layers.push(layer);
    }

    /// Sum of layer thicknesses (m)
    pub fn total_depth(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }

    /// Top and bottom of every layer, absent layers included with `top == bottom`
    pub fn layer_bounds(&self) -> Vec<LayerBounds> {
        let mut top = 0.0;
        self.layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                let bounds = LayerBounds {
                    index,
                    top,
                    bottom: top + layer.thickness,
                };
                top = bounds.bottom;
                bounds
            })
            .collect()
    }

    /// Index of the layer containing `depth`
    ///
    /// Layer boundaries belong to the layer below; the profile bottom belongs
    /// to the deepest present layer. Absent layers never match.
    pub fn layer_at(&self, depth: f64) -> Option<usize> {
        let bounds = self.layer_bounds();
        let total = self.total_depth();

        if depth == total {
            return bounds.iter().rev().find(|b| b.thickness() > 0.0).map(|b| b.index);
        }

        bounds
            .iter()
            .find(|b| b.thickness() > 0.0 && depth >= b.top && depth < b.bottom)
            .map(|b| b.index)
    }

    /// Initial vertical effective stress (kPa) at `depth`, summed top-down over all layers
    pub fn initial_effective_stress(&self, depth: f64) -> f64 {
        self.layer_bounds()
            .iter()
            .filter(|b| b.top < depth)
            .map(|b| {
                self.layers[b.index].overburden_between(b.top, b.bottom.min(depth), self.water_table)
            })
            .sum()
    }

    pub fn validate(&self) -> Result<(), SoilError> {
        if self.layers.is_empty() {
            return Err(SoilError::InvalidProfile("profile has no layers".into()));
        }

        for (index, layer) in self.layers.iter().enumerate() {
            layer.validate(index)?;
        }

        let total = self.total_depth();
        if total <= 0.0 {
            return Err(SoilError::InvalidProfile(
                "total profile thickness must be positive".into(),
            ));
        }

        if !self.water_table.is_finite() || self.water_table < 0.0 || self.water_table > total {
            return Err(SoilError::InvalidProfile(format!(
                "water table at {} lies outside the profile (0 to {})",
                DisplayLength::meters(self.water_table),
                DisplayLength::meters(total)
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn three_layers() -> SoilProfile {
        SoilProfile::new(
            vec![
                SoilLayer::new(4.0, 18.0, 19.0),
                SoilLayer::new(4.0, 19.0, 21.0),
                SoilLayer::new(4.0, 18.0, 19.0),
            ],
            1.0,
        )
    }

    #[test]
    fn test_bounds_and_depth() {
        let profile = three_layers();
        assert_relative_eq!(profile.total_depth(), 12.0);

        let bounds = profile.layer_bounds();
        assert_eq!(bounds.len(), 3);
        assert_relative_eq!(bounds[1].top, 4.0);
        assert_relative_eq!(bounds[2].bottom, 12.0);
    }

    #[test]
    fn test_layer_at() {
        let mut profile = three_layers();
        profile.layers[1].thickness = 0.0;

        assert_eq!(profile.layer_at(0.0), Some(0));
        assert_eq!(profile.layer_at(3.9), Some(0));
        // Boundary skips the absent middle layer
        assert_eq!(profile.layer_at(4.0), Some(2));
        assert_eq!(profile.layer_at(8.0), Some(2));
        assert_eq!(profile.layer_at(9.0), None);
    }

    #[test]
    fn test_initial_effective_stress() {
        let profile = three_layers();
        // 1 m dry at 18 + 3 m submerged at 9
        assert_relative_eq!(profile.initial_effective_stress(4.0), 45.0);
        // plus 2 m of layer 2 at 11
        assert_relative_eq!(profile.initial_effective_stress(6.0), 67.0);
        assert_relative_eq!(profile.initial_effective_stress(0.5), 9.0);
        assert_relative_eq!(profile.initial_effective_stress(0.0), 0.0);
    }

    #[test]
    fn test_water_table_inside_lower_layer() {
        let mut profile = three_layers();
        profile.water_table = 6.0;
        // Layer 1 dry at 18, layer 2: 2 m dry at 19, then 1 m submerged at 11
        assert_relative_eq!(profile.initial_effective_stress(7.0), 72.0 + 38.0 + 11.0);
    }

    #[test]
    fn test_validation() {
        assert!(three_layers().validate().is_ok());

        let empty = SoilProfile::new(vec![], 0.0);
        assert!(matches!(empty.validate(), Err(SoilError::InvalidProfile(_))));

        let mut deep_water = three_layers();
        deep_water.water_table = 12.5;
        assert!(deep_water.validate().is_err());

        let mut no_thickness = three_layers();
        no_thickness.layers.iter_mut().for_each(|l| l.thickness = 0.0);
        no_thickness.water_table = 0.0;
        assert!(no_thickness.validate().is_err());

        let mut bad_layer = three_layers();
        bad_layer.layers[2].ocr = 0.5;
        assert!(matches!(
            bad_layer.validate(),
            Err(SoilError::InvalidLayer { index: 2, .. })
        ));
    }
}
