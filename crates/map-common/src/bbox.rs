//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};
use crate::region::Region;

/// Axis-aligned box in longitude / projected latitude degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Smallest box containing every region of a frame.
    pub fn enclosing(regions: &[Region]) -> MapResult<Self> {
        let (first, rest) = regions.split_first().ok_or(MapError::EmptyFrame)?;
        Ok(rest
            .iter()
            .fold(first.bounding_box(), |acc, region| acc.union(&region.bounding_box())))
    }

    /// Elementwise min/max of two boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_lon: self.min_lon.min(other.min_lon),
            min_lat: self.min_lat.min(other.min_lat),
            max_lon: self.max_lon.max(other.max_lon),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounding box in projected degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, -5.0, 15.0, 8.0);

        let union = a.union(&b);
        assert_eq!(union.min_lon, 0.0);
        assert_eq!(union.min_lat, -5.0);
        assert_eq!(union.max_lon, 15.0);
        assert_eq!(union.max_lat, 10.0);
    }

    #[test]
    fn test_enclosing_empty_frame() {
        assert!(matches!(
            BoundingBox::enclosing(&[]),
            Err(MapError::EmptyFrame)
        ));
    }
}
