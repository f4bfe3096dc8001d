//! Influence factor field over a vertical section through the footing
//!
//! The section runs along the footing width through its mid-length. A
//! section point at lateral offset `x` splits the footprint `[x0, x1]` into
//! two rectangles of half-length `n` meeting at the point's projection:
//! - projection inside the footprint: both rectangles are loaded, so their
//!   corner factors **add**
//! - projection outside: the far rectangle over-covers the load and the near
//!   one (between the point and the footprint) is **subtracted**
//!
//! Each rectangle appears twice (either side of the section line).

use crate::foundation::FoundationGeometry;
use crate::stress::{StressError, corner_influence_factor};
use crate::types::na;
use serde::{Deserialize, Serialize};

/// Sample spacing used to size the default section grid (m)
pub const GRID_SPACING: f64 = 0.1;

/// Depth extent of the default section grid, as a multiple of the footing width
pub const GRID_DEPTH_FACTOR: f64 = 2.5;

/// Upper bound on nodes in one section grid
pub const MAX_GRID_POINTS: usize = 4_000_000;

/// Plan footprint seen by the section: lateral edges and half of the length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripFootprint {
    pub x0: f64,
    pub x1: f64,
    pub half_length: f64,
}

impl StripFootprint {
    pub fn new(x0: f64, x1: f64, length: f64) -> Self {
        Self {
            x0,
            x1,
            half_length: length / 2.0,
        }
    }

    /// Footprint of a footing centered at `center_x`
    pub fn centered(footing: &FoundationGeometry, center_x: f64) -> Self {
        let (half_width, _) = footing.half_dimensions();
        Self::new(center_x - half_width, center_x + half_width, footing.length)
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.x0 + self.x1)
    }

    /// Whether the lateral projection of `x` falls on the footprint (edges included)
    pub fn contains(&self, x: f64) -> bool {
        x >= self.x0 && x <= self.x1
    }

    fn validate(&self) -> Result<(), StressError> {
        if !self.x0.is_finite() || !self.x1.is_finite() || self.x1 <= self.x0 {
            return Err(StressError::InvalidArgument(format!(
                "footprint edges must satisfy x0 < x1, got [{}, {}]",
                self.x0, self.x1
            )));
        }
        if !self.half_length.is_finite() || self.half_length <= 0.0 {
            return Err(StressError::InvalidArgument(format!(
                "footprint length must be positive, got {}",
                2.0 * self.half_length
            )));
        }
        Ok(())
    }

    /// Influence factor at lateral offset `x` and depth `z` (no validation)
    fn factor_at(&self, x: f64, z: f64) -> f64 {
        let n = self.half_length;

        let factor = if x <= self.x0 {
            2.0 * corner_influence_factor(self.x1 - x, n, z)
                - 2.0 * corner_influence_factor(self.x0 - x, n, z)
        } else if x >= self.x1 {
            2.0 * corner_influence_factor(x - self.x0, n, z)
                - 2.0 * corner_influence_factor(x - self.x1, n, z)
        } else {
            2.0 * corner_influence_factor(self.x1 - x, n, z)
                + 2.0 * corner_influence_factor(x - self.x0, n, z)
        };

        factor.max(0.0)
    }

    /// Influence factor at a single section point
    pub fn influence_factor(&self, x: f64, z: f64) -> Result<f64, StressError> {
        self.validate()?;
        if !x.is_finite() {
            return Err(StressError::InvalidArgument(format!(
                "lateral offset must be finite, got {x}"
            )));
        }
        if !z.is_finite() || z < 0.0 {
            return Err(StressError::InvalidArgument(format!(
                "depth must be non-negative, got {z}"
            )));
        }
        Ok(self.factor_at(x, z))
    }
}

/// Influence factors sampled over a section: rows are depths, columns offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceGrid {
    pub footprint: StripFootprint,
    pub offsets: Vec<f64>,
    pub depths: Vec<f64>,
    pub factors: na::DMatrix<f64>,
}

impl InfluenceGrid {
    /// Evaluate the factor field for arbitrary offsets and depths
    pub fn evaluate(
        footprint: StripFootprint,
        offsets: Vec<f64>,
        depths: Vec<f64>,
    ) -> Result<Self, StressError> {
        footprint.validate()?;
        check_grid_size(depths.len() as f64 * offsets.len() as f64)?;

        if let Some(x) = offsets.iter().find(|x| !x.is_finite()) {
            return Err(StressError::InvalidArgument(format!(
                "lateral offset must be finite, got {x}"
            )));
        }
        if let Some(z) = depths.iter().find(|z| !z.is_finite() || **z < 0.0) {
            return Err(StressError::InvalidArgument(format!(
                "depth must be non-negative, got {z}"
            )));
        }

        let factors = na::DMatrix::from_fn(depths.len(), offsets.len(), |row, col| {
            footprint.factor_at(offsets[col], depths[row])
        });

        tracing::debug!(
            rows = depths.len(),
            cols = offsets.len(),
            "evaluated influence grid"
        );

        Ok(Self {
            footprint,
            offsets,
            depths,
            factors,
        })
    }

    /// Default section layout for a footing centered at `center_x`
    ///
    /// Offsets span `center_x ± a`, depths span `0 ..= 2.5a`, with
    /// `floor(4a / 0.1)` samples along each axis.
    pub fn for_footing(footing: &FoundationGeometry, center_x: f64) -> Result<Self, StressError> {
        footing.validate()?;

        let a = footing.width;
        let samples = (4.0 * a / GRID_SPACING).floor().max(2.0);
        check_grid_size(samples * samples)?;
        let samples = samples as usize;

        let offsets = linspace(center_x - a, center_x + a, samples);
        let depths = linspace(0.0, GRID_DEPTH_FACTOR * a, samples);

        Self::evaluate(StripFootprint::centered(footing, center_x), offsets, depths)
    }

    pub fn nrows(&self) -> usize {
        self.factors.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.factors.ncols()
    }

    pub fn factor(&self, row: usize, col: usize) -> Option<f64> {
        self.factors.get((row, col)).copied()
    }

    /// Stress increment (kPa) at a grid node for contact pressure `q`
    pub fn stress_at(&self, row: usize, col: usize, q: f64) -> Option<f64> {
        self.factor(row, col).map(|factor| factor * q)
    }

    pub fn max_factor(&self) -> f64 {
        self.factors.max()
    }

    /// Section points paired with their influence factor
    pub fn points(&self) -> impl Iterator<Item = (na::Point2<f64>, f64)> + '_ {
        self.depths.iter().enumerate().flat_map(move |(row, &z)| {
            self.offsets
                .iter()
                .enumerate()
                .map(move |(col, &x)| (na::Point2::new(x, z), self.factors[(row, col)]))
        })
    }
}

fn check_grid_size(points: f64) -> Result<(), StressError> {
    if points > MAX_GRID_POINTS as f64 {
        return Err(StressError::InvalidArgument(format!(
            "section grid of {points} points exceeds {MAX_GRID_POINTS}"
        )));
    }
    Ok(())
}

fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    if samples < 2 {
        return vec![start];
    }
    let step = (end - start) / (samples - 1) as f64;
    (0..samples)
        .map(|i| if i == samples - 1 { end } else { start + step * i as f64 })
        .collect()
}
