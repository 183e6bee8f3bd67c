//! Coordinate projections.
//!
//! Only the latitude half of Mercator is needed: longitudes pass through
//! unchanged.

pub mod mercator;

pub use mercator::{project_latitude, project_pairs, project_point};
