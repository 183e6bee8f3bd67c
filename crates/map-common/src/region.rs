//! Projected points and the regions built from them.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::error::{MapError, MapResult};

/// A longitude and a Mercator-projected latitude, both in degrees.
///
/// The latitude has already gone through the projection. Raw latitudes are
/// never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
}

impl GeoPoint {
    /// Wrap a longitude and an already projected latitude.
    pub fn from_projected(lon: f64, projected_lat: f64) -> Self {
        Self {
            lon,
            lat: projected_lat,
        }
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Projected latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

/// One county polygon and its poverty rate (percent, 0-100).
///
/// The polygon is closed implicitly; the first point does not need to be
/// repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    coords: Vec<GeoPoint>,
    metric: f64,
}

impl Region {
    /// Build a region, rejecting polygons with fewer than three vertices.
    pub fn new(coords: Vec<GeoPoint>, metric: f64) -> MapResult<Self> {
        if coords.len() < 3 {
            return Err(MapError::TooFewPoints(coords.len()));
        }
        Ok(Self { coords, metric })
    }

    pub fn coords(&self) -> &[GeoPoint] {
        &self.coords
    }

    /// Raw poverty percentage.
    pub fn metric(&self) -> f64 {
        self.metric
    }

    pub fn min_lon(&self) -> f64 {
        self.coords.iter().map(GeoPoint::lon).fold(f64::INFINITY, f64::min)
    }

    pub fn max_lon(&self) -> f64 {
        self.coords
            .iter()
            .map(GeoPoint::lon)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_lat(&self) -> f64 {
        self.coords.iter().map(GeoPoint::lat).fold(f64::INFINITY, f64::min)
    }

    pub fn max_lat(&self) -> f64 {
        self.coords
            .iter()
            .map(GeoPoint::lat)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Bounding box of this region alone.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.min_lon(), self.min_lat(), self.max_lon(), self.max_lat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::from_projected(-123.0, 48.0),
            GeoPoint::from_projected(-122.0, 48.0),
            GeoPoint::from_projected(-122.0, 49.5),
            GeoPoint::from_projected(-123.0, 49.5),
        ]
    }

    #[test]
    fn test_region_extents() {
        let region = Region::new(square(), 12.5).unwrap();
        assert_eq!(region.min_lon(), -123.0);
        assert_eq!(region.max_lon(), -122.0);
        assert_eq!(region.min_lat(), 48.0);
        assert_eq!(region.max_lat(), 49.5);
        assert_eq!(region.metric(), 12.5);
    }

    #[test]
    fn test_region_rejects_two_points() {
        let mut coords = square();
        coords.truncate(2);
        let err = Region::new(coords, 1.0).unwrap_err();
        assert!(matches!(err, MapError::TooFewPoints(2)));
    }

    #[test]
    fn test_region_rejects_empty() {
        assert!(matches!(
            Region::new(Vec::new(), 1.0),
            Err(MapError::TooFewPoints(0))
        ));
    }
}
