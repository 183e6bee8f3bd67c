//! Per-frame metric range used to normalize the color scale.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};
use crate::region::Region;

/// Minimum and maximum poverty rate of one frame, as fractions (percent / 100).
///
/// The range is recomputed for every frame, so colors are relative to the
/// year being drawn rather than to the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range of `metric / 100` across all regions.
    pub fn from_regions(regions: &[Region]) -> MapResult<Self> {
        if regions.is_empty() {
            return Err(MapError::EmptyFrame);
        }
        let (min, max) = regions
            .iter()
            .map(|r| r.metric() / 100.0)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        Ok(Self { min, max })
    }

    /// Boundary between the blue-green and green-red halves of the gradient.
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// True when every region shares one value.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}
