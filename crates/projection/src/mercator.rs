//! Mercator latitude projection.
//!
//! Maps a geographic latitude (degrees) to the Mercator y coordinate
//! expressed in degrees, so projected values stay comparable to longitudes:
//!
//! ```text
//! y = (180 / PI) * ln(tan(PI/4 + phi/2)),  phi = lat * PI / 180
//! ```

use std::f64::consts::{FRAC_PI_4, PI};

use map_common::{GeoPoint, MapError, MapResult};

/// Project a latitude in degrees.
///
/// Undefined at the poles; callers wanting a checked result should use
/// [`project_point`].
pub fn project_latitude(lat_degrees: f64) -> f64 {
    let phi = lat_degrees * PI / 180.0;
    let y = (FRAC_PI_4 + phi / 2.0).tan().ln();
    y * 180.0 / PI
}

/// Project one (longitude, latitude) pair.
///
/// Fails for latitudes at or beyond the poles, and for any input whose
/// projection is not finite (NaN input included).
pub fn project_point(lon: f64, lat: f64) -> MapResult<GeoPoint> {
    if lat.abs() >= 90.0 {
        return Err(MapError::PolarLatitude(lat));
    }
    let projected = project_latitude(lat);
    if !projected.is_finite() || !lon.is_finite() {
        tracing::debug!(lon, lat, projected, "Non-finite Mercator projection");
        return Err(MapError::NonFiniteProjection(lat));
    }
    Ok(GeoPoint::from_projected(lon, projected))
}

/// Project a polygon given as (longitude, latitude) pairs, preserving order.
pub fn project_pairs(pairs: &[(f64, f64)]) -> MapResult<Vec<GeoPoint>> {
    pairs
        .iter()
        .map(|&(lon, lat)| project_point(lon, lat))
        .collect()
}
