//! County boundary polygons.
//!
//! The boundary file has no header. Each line is one polygon:
//!
//! ```text
//! county,state,lon,lat,lon,lat,lon,lat,...
//! ```
//!
//! Latitudes are raw degrees; projection happens when a row becomes a region.

use std::io::Read;
use std::path::Path;

use map_common::{MapError, MapResult, Region};
use projection::project_pairs;

use crate::error::{IngestionError, Result};

/// One polygon row from the boundary file.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRow {
    pub county: String,
    pub state: String,
    /// Flat lon, lat, lon, lat, ... sequence as read.
    pub coords: Vec<f64>,
}

impl BoundaryRow {
    fn from_record(record: &csv::StringRecord, line: u64) -> Result<Self> {
        if record.len() < 2 {
            return Err(IngestionError::InvalidBoundary {
                line,
                message: format!("expected county and state, got {} fields", record.len()),
            });
        }

        // Only trailing empty fields may be dropped.
        let fields: Vec<&str> = record.iter().skip(2).collect();
        let used = fields
            .iter()
            .rposition(|field| !field.is_empty())
            .map_or(0, |last| last + 1);

        let coords = fields[..used]
            .iter()
            .enumerate()
            .map(|(index, field)| {
                if field.is_empty() {
                    return Err(IngestionError::InvalidBoundary {
                        line,
                        message: format!("empty coordinate at position {}", index),
                    });
                }
                field.parse::<f64>().map_err(|_| IngestionError::InvalidBoundary {
                    line,
                    message: format!("'{}' is not a number", field),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Self {
            county: record[0].to_string(),
            state: record[1].to_string(),
            coords,
        })
    }

    /// (longitude, latitude) pairs; fails on an odd coordinate count.
    pub fn pairs(&self) -> MapResult<Vec<(f64, f64)>> {
        if self.coords.len() % 2 != 0 {
            return Err(MapError::OddCoordinateCount {
                county: self.county.clone(),
                state: self.state.clone(),
                count: self.coords.len(),
            });
        }
        Ok(self.coords.chunks_exact(2).map(|c| (c[0], c[1])).collect())
    }

    /// Project the polygon and attach `metric`.
    pub fn to_region(&self, metric: f64) -> MapResult<Region> {
        let points = project_pairs(&self.pairs()?)?;
        Region::new(points, metric)
    }
}

/// Parse boundary rows from any reader.
pub fn parse_boundaries<R: Read>(reader: R) -> Result<Vec<BoundaryRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(BoundaryRow::from_record(&record, line)?);
    }
    Ok(rows)
}

/// Read every boundary row from `path`.
pub fn read_boundaries<P: AsRef<Path>>(path: P) -> Result<Vec<BoundaryRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let rows = parse_boundaries(file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded county boundaries");
    Ok(rows)
}
