//! Service configuration.
//!
//! Loaded from an optional YAML file, then overridden by environment
//! variables. Every field has a default, so an empty file is valid:
//!
//! ```yaml
//! census:
//!   api_key: "..."
//!   excluded_states: [AK, HI]
//! chart:
//!   width: 640
//!   height: 480
//! output_dir: frames
//! ```

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ingestion::CensusConfig;
use renderer::ChartConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Trend chart size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        let defaults = ChartConfig::default();
        Self {
            width: defaults.width,
            height: defaults.height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub census: CensusConfig,
    pub chart: ChartSize,
    /// Directory that receives the stitched frames
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            census: CensusConfig::default(),
            chart: ChartSize::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load from `path` if given, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                debug!(path = %path.display(), "Loaded config file");
                Self::from_yaml_str(&contents)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        Ok(config.apply_env())
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Override from `CENSUS_API_KEY`, `SAIPE_BASE_URL`, `EXCLUDED_STATES`,
    /// `GRAPH_WIDTH` and `GRAPH_HEIGHT`.
    pub fn apply_env(mut self) -> Self {
        self.census = self.census.apply_env();
        if let Some(width) = env_u32("GRAPH_WIDTH") {
            self.chart.width = width;
        }
        if let Some(height) = env_u32("GRAPH_HEIGHT") {
            self.chart.height = height;
        }
        self
    }

    /// Chart layout with the configured size and default margins.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            width: self.chart.width,
            height: self.chart.height,
            ..ChartConfig::default()
        }
    }
}

fn env_u32(name: &str) -> Option<u32> {
    let value = env::var(name).ok()?;
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            warn!(name, value = %value, "Ignoring invalid size override");
            None
        }
    }
}
