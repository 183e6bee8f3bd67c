//! Poverty map renderer.
//!
//! For every year in the requested range, fetches county poverty rates from
//! the Census SAIPE API and writes `{year}stitched.png`: the county map on the
//! left and the national crime-rate trend on the right.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use ingestion::{read_boundaries, read_crime_rates, SaipeClient};
use poverty_map::{AppConfig, Pipeline, PipelineOptions};

#[derive(Parser, Debug)]
#[command(name = "poverty-map")]
#[command(about = "Render county poverty maps next to national crime-rate trends")]
struct Args {
    /// National crime-rate CSV
    crime_data: PathBuf,

    /// County boundary CSV (county, state, lon, lat, lon, lat, ...)
    boundaries: PathBuf,

    /// First year to render
    year_start: i32,

    /// Last year to render (inclusive)
    year_end: i32,

    /// Map width in pixels
    width: u32,

    /// YAML configuration file
    #[arg(short, long, env = "POVERTY_MAP_CONFIG")]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Keep the map and graph images next to each stitched frame
    #[arg(long)]
    keep_intermediate: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn validate(&self) -> Result<()> {
        if self.year_start > self.year_end {
            bail!(
                "year_start ({}) is after year_end ({})",
                self.year_start,
                self.year_end
            );
        }
        if self.width == 0 {
            bail!("width must be at least 1 pixel");
        }
        Ok(())
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let builder = fmt().with_env_filter(filter).with_target(true);
    if args.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);
    args.validate()?;

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let years = args.year_start..=args.year_end;
    info!(
        start = args.year_start,
        end = args.year_end,
        width = args.width,
        output_dir = %config.output_dir.display(),
        "Starting poverty map run"
    );

    let boundaries = read_boundaries(&args.boundaries)
        .with_context(|| format!("Failed to load boundaries {}", args.boundaries.display()))?;
    let crime = read_crime_rates(&args.crime_data, &years)
        .with_context(|| format!("Failed to load crime rates {}", args.crime_data.display()))?;

    let options = PipelineOptions {
        width: args.width,
        output_dir: config.output_dir.clone(),
        keep_intermediate: args.keep_intermediate,
        chart: config.chart_config(),
    };
    let client = SaipeClient::new(config.census).context("Failed to build Census client")?;
    let pipeline = Pipeline::new(client, boundaries, crime, options);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    let summary = runtime.block_on(pipeline.run(years));

    if !summary.is_success() {
        bail!("{} frame(s) failed: {:?}", summary.failed.len(), summary.failed);
    }
    Ok(())
}
