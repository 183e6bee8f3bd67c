//! Raster rendering for poverty choropleths and their trend charts.
//!
//! - `gradient`: metric value to heat-map color
//! - `canvas`: geographic to pixel mapping and polygon rasterization
//! - `chart`: yearly line charts
//! - `compose`: side-by-side stitching
//! - `png`: lossless PNG encoding

pub mod canvas;
pub mod chart;
pub mod compose;
pub mod gradient;
pub mod png;

pub use canvas::{interpolate, interpolate_flipped, Canvas};
pub use chart::{render_trend_chart, ChartConfig};
pub use gradient::{heat_color, Color};
