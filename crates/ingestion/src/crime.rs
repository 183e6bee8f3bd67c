//! National crime-rate table.
//!
//! Only rows whose first column is a year inside the requested range count.
//! Title rows, headers and footnotes fall out naturally because their first
//! column is not a number.

use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use map_common::TrendSeries;

use crate::error::Result;

pub const VIOLENT_CRIME_RATE: &str = "Violent Crime rate";
pub const PROPERTY_CRIME_RATE: &str = "Property crime rate";

/// Rates per 100,000 people.
const VIOLENT_RATE_COLUMN: usize = 2;
const PROPERTY_RATE_COLUMN: usize = 8;

fn parse_column(record: &csv::StringRecord, index: usize) -> Option<f64> {
    record
        .get(index)
        .and_then(|v| v.trim().replace(',', "").parse::<f64>().ok())
}

/// Parse violent and property crime rates for `years`.
///
/// Returns the two series in that order, or no series at all when no row
/// falls inside the range.
pub fn parse_crime_rates<R: Read>(reader: R, years: &RangeInclusive<i32>) -> Result<Vec<TrendSeries>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut violent = TrendSeries::new(VIOLENT_CRIME_RATE);
    let mut property = TrendSeries::new(PROPERTY_CRIME_RATE);

    for result in csv_reader.records() {
        let record = result?;
        let Some(year) = record.get(0).and_then(|v| v.trim().parse::<i32>().ok()) else {
            continue;
        };
        if !years.contains(&year) {
            continue;
        }
        match (
            parse_column(&record, VIOLENT_RATE_COLUMN),
            parse_column(&record, PROPERTY_RATE_COLUMN),
        ) {
            (Some(v), Some(p)) => {
                violent.push(year, v);
                property.push(year, p);
            }
            _ => tracing::trace!(year, "Skipping crime row without both rates"),
        }
    }

    if violent.points.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![violent, property])
}

/// Read crime rates from a CSV file.
pub fn read_crime_rates<P: AsRef<Path>>(path: P, years: &RangeInclusive<i32>) -> Result<Vec<TrendSeries>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let series = parse_crime_rates(file, years)?;
    tracing::info!(
        path = %path.display(),
        years = series.first().map_or(0, |s| s.points.len()),
        "Loaded crime rates"
    );
    Ok(series)
}
