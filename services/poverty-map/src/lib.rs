//! Poverty map service.
//!
//! Renders one frame per year: a county choropleth of poverty rates stitched
//! next to a chart of national crime rates with that year highlighted.

pub mod config;
pub mod frame;
pub mod pipeline;

pub use config::{AppConfig, ChartSize};
pub use pipeline::{Pipeline, PipelineOptions, RunSummary};
