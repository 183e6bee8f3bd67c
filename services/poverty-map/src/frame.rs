//! Single-year map rendering.

use std::path::Path;

use ingestion::{BoundaryRow, PovertyTable};
use map_common::{BoundingBox, MapResult, MetricRange, Region};
use renderer::Canvas;
use tracing::{debug, info};

pub fn map_filename(year: i32) -> String {
    format!("{}map_output.png", year)
}

pub fn graph_filename(year: i32) -> String {
    format!("{}graph_output.png", year)
}

pub fn stitched_filename(year: i32) -> String {
    format!("{}stitched.png", year)
}

/// Attach each county's poverty rate to its projected boundary.
///
/// Counties missing from `table` get a rate of 0. Output order follows `rows`.
pub fn build_regions(rows: &[BoundaryRow], table: &PovertyTable) -> MapResult<Vec<Region>> {
    let mut missing = 0usize;
    let regions = rows
        .iter()
        .map(|row| {
            let metric = table.lookup(&row.state, &row.county).unwrap_or_else(|| {
                missing += 1;
                0.0
            });
            row.to_region(metric)
        })
        .collect::<MapResult<Vec<_>>>()?;

    if missing > 0 {
        debug!(missing, total = rows.len(), "Counties without a poverty rate");
    }
    Ok(regions)
}

/// Rasterize `regions` onto a canvas `width` pixels wide.
///
/// Regions are painted in order, so later regions cover earlier ones where
/// they overlap.
pub fn render_map(regions: &[Region], width: u32) -> MapResult<Canvas> {
    let bbox = BoundingBox::enclosing(regions)?;
    let range = MetricRange::from_regions(regions)?;
    let mut canvas = Canvas::new(width, bbox)?;

    for region in regions {
        canvas.draw(region, &range);
    }

    debug!(
        regions = regions.len(),
        width = canvas.width(),
        height = canvas.height(),
        min = range.min,
        max = range.max,
        "Rendered map"
    );
    Ok(canvas)
}

/// Build, render and save one year's map to `path`.
pub fn render_frame(
    rows: &[BoundaryRow],
    table: &PovertyTable,
    width: u32,
    path: &Path,
) -> MapResult<()> {
    let regions = build_regions(rows, table)?;
    let canvas = render_map(&regions, width)?;
    canvas.save(path)?;
    info!(path = %path.display(), "Saved map");
    Ok(())
}
