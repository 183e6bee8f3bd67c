//! Error types for map rendering.

use std::fmt;

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Geographic axis, used to report which span collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => f.write_str("longitude"),
            Axis::Latitude => f.write_str("latitude"),
        }
    }
}

/// Primary error type for frame rendering.
///
/// Every variant is fatal to the frame being rendered. Drivers decide whether
/// to move on to the next year.
#[derive(Debug, Error)]
pub enum MapError {
    // === Numeric domain errors ===
    #[error("Latitude {0} is outside the Mercator domain (-90, 90)")]
    PolarLatitude(f64),

    #[error("Projection of latitude {0} is not finite")]
    NonFiniteProjection(f64),

    #[error("Bounding box has zero {axis} span")]
    DegenerateBounds { axis: Axis },

    #[error("Canvas of width {width} has zero height for this bounding box")]
    EmptyCanvas { width: u32 },

    #[error("Canvas {width}x{height} exceeds the {max} pixel limit")]
    CanvasTooLarge { width: u32, height: f64, max: u32 },

    // === Geometry errors ===
    #[error("Frame contains no regions")]
    EmptyFrame,

    #[error("Region needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("Odd coordinate count {count} for {county}, {state}")]
    OddCoordinateCount {
        county: String,
        state: String,
        count: usize,
    },

    // === Output errors ===
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to read image {path}: {message}")]
    Decode { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
