//! TOML scenario files
//!
//! ```toml
//! name = "Three clay layers"
//! water_table = { value = 1.0, unit = "m" }
//! sublayer_step = { value = 0.5, unit = "m" }
//! reference_step = { value = 5.0, unit = "cm" }
//!
//! [footing]
//! width = { value = 4.0, unit = "m" }
//! length = { value = 2.0, unit = "m" }
//! pressure = { value = 100.0, unit = "kPa" }
//!
//! [[layers]]
//! name = "Upper clay"
//! thickness = { value = 4.0, unit = "m" }
//! dry_unit_weight = 18.0
//! saturated_unit_weight = 19.0
//! compression_index = 0.1
//! swelling_index = 0.05
//! void_ratio = 2.0
//! ocr = 1.0
//! ```
//!
//! Unit weights are always kN/m³. `ocr` defaults to 1 and `reference_step`
//! to 5 cm.

use std::fs;
use std::path::Path;

use crate::foundation::FoundationGeometry;
use crate::scenario::ScenarioError;
use crate::settlement::{DEFAULT_REFERENCE_STEP, SettlementAnalysis, StepComparison};
use crate::soil::{SoilLayer, SoilProfile};
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub water_table: LengthValue,

    pub sublayer_step: LengthValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_step: Option<LengthValue>,

    pub footing: FootingConfig,

    pub layers: Vec<LayerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootingConfig {
    pub width: LengthValue,
    pub length: LengthValue,
    pub pressure: PressureValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub dry_unit_weight: f64,
    pub saturated_unit_weight: f64,
    pub compression_index: f64,
    pub swelling_index: f64,
    pub void_ratio: f64,
    #[serde(default = "default_ocr")]
    pub ocr: f64,
    pub thickness: LengthValue,
}

fn default_ocr() -> f64 {
    1.0
}

impl FootingConfig {
    /// Footing with `b` clamped to `a`
    pub fn to_footing(&self) -> Result<FoundationGeometry, ScenarioError> {
        let width = self.width.meters()?;
        let length = self.length.meters()?;
        let pressure = self.pressure.kilopascals()?;

        if length > width {
            tracing::warn!(width, length, "footing length exceeds width, clamping to width");
        }
        Ok(FoundationGeometry::clamped(width, length, pressure))
    }
}

impl LayerConfig {
    pub fn to_layer(&self) -> Result<SoilLayer, ScenarioError> {
        Ok(SoilLayer {
            name: self.name.clone(),
            thickness: self.thickness.meters()?,
            dry_unit_weight: self.dry_unit_weight,
            saturated_unit_weight: self.saturated_unit_weight,
            compression_index: self.compression_index,
            swelling_index: self.swelling_index,
            void_ratio: self.void_ratio,
            ocr: self.ocr,
        })
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(toml)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_toml_file(&self, path: impl AsRef<Path>) -> Result<(), ScenarioError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Sublayer step in meters
    pub fn step(&self) -> Result<f64, ScenarioError> {
        Ok(self.sublayer_step.meters()?)
    }

    /// Reference step in meters, [`DEFAULT_REFERENCE_STEP`] when omitted
    pub fn reference_step(&self) -> Result<f64, ScenarioError> {
        match &self.reference_step {
            Some(step) => Ok(step.meters()?),
            None => Ok(DEFAULT_REFERENCE_STEP),
        }
    }

    pub fn to_analysis(&self) -> Result<SettlementAnalysis, ScenarioError> {
        let footing = self.footing.to_footing()?;
        let layers = self
            .layers
            .iter()
            .map(LayerConfig::to_layer)
            .collect::<Result<Vec<_>, _>>()?;
        let profile = SoilProfile::new(layers, self.water_table.meters()?);

        Ok(SettlementAnalysis::new(footing, profile))
    }

    /// Evaluate the scenario at its step and its reference step
    pub fn run(&self) -> Result<StepComparison, ScenarioError> {
        let analysis = self.to_analysis()?;
        let comparison = analysis.evaluate_with_reference(self.step()?, self.reference_step()?)?;

        tracing::info!(
            scenario = self.name.as_deref().unwrap_or("unnamed"),
            total = comparison.coarse.total_settlement,
            reference_total = comparison.reference.total_settlement,
            "scenario evaluated"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SCENARIO: &str = r#"
name = "Three clay layers"
water_table = { value = 1.0, unit = "m" }
sublayer_step = { value = 50.0, unit = "cm" }

[footing]
width = { value = 4.0, unit = "m" }
length = { value = 2000.0, unit = "mm" }
pressure = { value = 0.1, unit = "MPa" }

[[layers]]
name = "Upper clay"
thickness = { value = 4.0, unit = "m" }
dry_unit_weight = 18.0
saturated_unit_weight = 19.0
compression_index = 0.1
swelling_index = 0.05
void_ratio = 2.0

[[layers]]
thickness = { value = 4.0, unit = "m" }
dry_unit_weight = 18.0
saturated_unit_weight = 19.0
compression_index = 0.1
swelling_index = 0.05
void_ratio = 2.0

[[layers]]
thickness = { value = 4.0, unit = "m" }
dry_unit_weight = 18.0
saturated_unit_weight = 19.0
compression_index = 0.1
swelling_index = 0.05
void_ratio = 2.0
ocr = 1.0
"#;

    #[test]
    fn test_parse_scenario() {
        let config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();
        assert_eq!(config.layers.len(), 3);
        assert_relative_eq!(config.layers[1].ocr, 1.0);
        assert_relative_eq!(config.step().unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(config.reference_step().unwrap(), DEFAULT_REFERENCE_STEP);

        let analysis = config.to_analysis().unwrap();
        assert_relative_eq!(analysis.footing.length, 2.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.footing.pressure, 100.0, epsilon = 1e-9);
        assert_eq!(analysis.profile.layers[0].name.as_deref(), Some("Upper clay"));
    }

    #[test]
    fn test_run_matches_direct_evaluation() {
        let comparison = ScenarioConfig::from_toml_str(SCENARIO).unwrap().run().unwrap();
        assert_relative_eq!(comparison.coarse.total_settlement, 198.9987095691067, epsilon = 1e-6);
        assert_relative_eq!(comparison.reference.step, 0.05);
        assert!(comparison.difference() > 0.0);
    }

    #[test]
    fn test_length_clamped_to_width() {
        let footing = FootingConfig {
            width: LengthValue::new(3.0, "m"),
            length: LengthValue::new(5.0, "m"),
            pressure: PressureValue::new(100.0, "kPa"),
        };
        assert_relative_eq!(footing.to_footing().unwrap().length, 3.0);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let text = SCENARIO.replace(r#"unit = "cm""#, r#"unit = "ft""#);
        let config = ScenarioConfig::from_toml_str(&text).unwrap();
        assert!(matches!(config.step(), Err(ScenarioError::Unit(_))));
    }

    #[test]
    fn test_invalid_layer_surfaces_as_settlement_error() {
        let text = SCENARIO.replace("ocr = 1.0", "ocr = 0.5");
        let result = ScenarioConfig::from_toml_str(&text).unwrap().run();
        assert!(matches!(result, Err(ScenarioError::Settlement(_))));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ScenarioConfig::from_toml_str("water_table = ["),
            Err(ScenarioError::TomlParse(_))
        ));
    }

    #[test]
    fn test_toml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");

        let config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();
        config.to_toml_file(&path).unwrap();
        let reloaded = ScenarioConfig::from_toml_file(&path).unwrap();

        assert_eq!(reloaded.layers.len(), 3);
        assert_eq!(reloaded.name, config.name);
        assert_eq!(reloaded.sublayer_step.unit, "cm");
    }
}
