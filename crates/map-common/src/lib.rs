//! Common types shared by the projection, renderer and ingestion crates.

pub mod bbox;
pub mod error;
pub mod metric;
pub mod region;
pub mod series;

pub use bbox::BoundingBox;
pub use error::{Axis, MapError, MapResult};
pub use metric::MetricRange;
pub use region::{GeoPoint, Region};
pub use series::TrendSeries;
