//! Yearly time series shown next to the map.

use serde::{Deserialize, Serialize};

/// A named series of (year, value) points, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub name: String,
    pub points: Vec<(i32, f64)>,
}

impl TrendSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, year: i32, value: f64) {
        self.points.push((year, value));
    }

    /// Value recorded for `year`, if any.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|(y, _)| *y == year)
            .map(|&(_, v)| v)
    }

    /// (min, max) of the values, or None for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|&(_, v)| v).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
