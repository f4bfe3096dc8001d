//! CSV and JSON output of evaluated profiles

use std::fs;
use std::io;
use std::path::Path;

use crate::scenario::ScenarioError;
use crate::settlement::{EvaluationResult, StepComparison};
use crate::stress::InfluenceGrid;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProfileRow {
    depth_m: f64,
    thickness_m: f64,
    layer: usize,
    sigma_i_kpa: f64,
    delta_sigma_kpa: f64,
    sigma_f_kpa: f64,
    sigma_p_kpa: f64,
    branch: &'static str,
    delta_rho_mm: f64,
    rho_mm: f64,
}

#[derive(Debug, Serialize)]
struct GridRow {
    x_m: f64,
    z_m: f64,
    influence: f64,
}

/// Write one row per sublayer; layers are numbered from 1
pub fn write_profile_csv<W: io::Write>(result: &EvaluationResult, writer: W) -> Result<(), ScenarioError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in &result.points {
        csv_writer.serialize(ProfileRow {
            depth_m: point.depth,
            thickness_m: point.thickness,
            layer: point.layer_index + 1,
            sigma_i_kpa: point.initial_stress,
            delta_sigma_kpa: point.stress_increment,
            sigma_f_kpa: point.final_stress,
            sigma_p_kpa: point.preconsolidation_stress,
            branch: point.branch.label(),
            delta_rho_mm: point.incremental_settlement,
            rho_mm: point.cumulative_settlement,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_profile_csv_file(result: &EvaluationResult, path: impl AsRef<Path>) -> Result<(), ScenarioError> {
    let file = fs::File::create(path.as_ref())?;
    write_profile_csv(result, file)
}

/// Write the section grid as `x_m,z_m,influence` rows, depth-major
pub fn write_grid_csv<W: io::Write>(grid: &InfluenceGrid, writer: W) -> Result<(), ScenarioError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (point, influence) in grid.points() {
        csv_writer.serialize(GridRow {
            x_m: point.x,
            z_m: point.y,
            influence,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_result_json(result: &EvaluationResult, path: impl AsRef<Path>) -> Result<(), ScenarioError> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a saved result; points must refer to layers below `layer_count`
pub fn read_result_json(path: impl AsRef<Path>) -> Result<EvaluationResult, ScenarioError> {
    let json = fs::read_to_string(path.as_ref())?;
    let result: EvaluationResult = serde_json::from_str(&json)?;

    if let Some(point) = result.points.iter().find(|p| p.layer_index >= result.layer_count) {
        return Err(ScenarioError::InvalidResult(format!(
            "point at {} m refers to layer {} but the result has {} layers",
            point.depth, point.layer_index, result.layer_count
        )));
    }
    Ok(result)
}

pub fn write_comparison_json(comparison: &StepComparison, path: impl AsRef<Path>) -> Result<(), ScenarioError> {
    let json = serde_json::to_string_pretty(comparison)?;
    fs::write(path, json)?;
    Ok(())
}
