//! Input data for poverty map frames.
//!
//! Loads the three inputs a frame is built from:
//!
//! - County boundary polygons from a headerless CSV file
//! - Per-county poverty rates from the Census SAIPE time-series API
//! - National crime rates from a CSV table
//!
//! None of this touches rendering; the output types are plain data that the
//! frame orchestrator turns into regions and charts.

pub mod boundaries;
pub mod config;
pub mod crime;
pub mod error;
pub mod saipe;

// Re-exports
pub use boundaries::{parse_boundaries, read_boundaries, BoundaryRow};
pub use config::CensusConfig;
pub use crime::{parse_crime_rates, read_crime_rates};
pub use error::{IngestionError, Result};
pub use saipe::{PovertyTable, SaipeClient};
