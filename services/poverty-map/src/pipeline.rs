//! Year-by-year frame driver.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ingestion::{BoundaryRow, PovertyTable, SaipeClient};
use map_common::TrendSeries;
use renderer::compose::{save_rgb, stitch_files};
use renderer::{render_trend_chart, ChartConfig};
use tracing::{error, info, warn};

use crate::frame;

/// Per-run rendering options.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Map width in pixels; height follows from the frame's extent
    pub width: u32,
    pub output_dir: PathBuf,
    /// Keep the map and graph images next to the stitched frame
    pub keep_intermediate: bool,
    pub chart: ChartConfig,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Stitched frames that were written, in year order
    pub frames: Vec<(i32, PathBuf)>,
    pub failed: Vec<i32>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders one stitched frame per year.
///
/// Boundaries and crime rates are loaded once by the caller; poverty rates
/// are fetched per year.
pub struct Pipeline {
    client: SaipeClient,
    boundaries: Vec<BoundaryRow>,
    crime: Vec<TrendSeries>,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(
        client: SaipeClient,
        boundaries: Vec<BoundaryRow>,
        crime: Vec<TrendSeries>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            client,
            boundaries,
            crime,
            options,
        }
    }

    /// Render every year in `years`, one after another.
    ///
    /// A failed year is logged and skipped; the summary lists it.
    pub async fn run(&self, years: RangeInclusive<i32>) -> RunSummary {
        let mut summary = RunSummary::default();

        for year in years.clone() {
            let result = match self.client.fetch_year(year).await {
                Ok(table) => self.render_year(year, &years, &table),
                Err(e) => Err(anyhow::Error::new(e).context("Failed to fetch poverty rates")),
            };

            match result {
                Ok(path) => summary.frames.push((year, path)),
                Err(e) => {
                    error!(year, error = %format!("{:#}", e), "Frame failed");
                    summary.failed.push(year);
                }
            }
        }

        info!(
            rendered = summary.frames.len(),
            failed = summary.failed.len(),
            "Run complete"
        );
        summary
    }

    /// Render, stitch and tidy up a single year given its poverty table.
    ///
    /// Intermediate images are removed whether or not the frame succeeds,
    /// unless `keep_intermediate` is set.
    pub fn render_year(
        &self,
        year: i32,
        years: &RangeInclusive<i32>,
        table: &PovertyTable,
    ) -> Result<PathBuf> {
        let dir = &self.options.output_dir;
        let map_path = dir.join(frame::map_filename(year));
        let graph_path = dir.join(frame::graph_filename(year));
        let stitched_path = dir.join(frame::stitched_filename(year));

        let result = self.write_frame(year, years, table, &map_path, &graph_path, &stitched_path);

        if !self.options.keep_intermediate {
            remove_intermediate(&map_path);
            remove_intermediate(&graph_path);
        }

        result?;
        info!(year, path = %stitched_path.display(), "Frame complete");
        Ok(stitched_path)
    }

    fn write_frame(
        &self,
        year: i32,
        years: &RangeInclusive<i32>,
        table: &PovertyTable,
        map_path: &Path,
        graph_path: &Path,
        stitched_path: &Path,
    ) -> Result<()> {
        frame::render_frame(&self.boundaries, table, self.options.width, map_path)
            .with_context(|| format!("Failed to render map for {}", year))?;

        let chart = render_trend_chart(&self.crime, years.clone(), year, &self.options.chart);
        save_rgb(&chart, graph_path)
            .with_context(|| format!("Failed to write graph {}", graph_path.display()))?;

        stitch_files(map_path, graph_path, stitched_path)
            .with_context(|| format!("Failed to stitch frame for {}", year))?;
        Ok(())
    }
}

fn remove_intermediate(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "Failed to remove intermediate image");
    }
}
