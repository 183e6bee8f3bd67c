//! Synthetic geometry for tests and benchmarks.

use map_common::{GeoPoint, Region};

/// Creates a `cols x rows` grid of square regions, each `size` degrees wide,
/// starting at (`origin_lon`, `origin_lat`) in projected space.
///
/// Metrics increase from 0 in steps of `100 / (cols * rows)` so the grid
/// spans the whole gradient.
pub fn create_region_grid(
    cols: usize,
    rows: usize,
    origin_lon: f64,
    origin_lat: f64,
    size: f64,
) -> Vec<Region> {
    let count = (cols * rows).max(1) as f64;
    let mut regions = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let lon = origin_lon + col as f64 * size;
            let lat = origin_lat + row as f64 * size;
            let metric = (row * cols + col) as f64 * 100.0 / count;
            regions.push(square_region(lon, lat, size, metric));
        }
    }
    regions
}

/// A single axis-aligned square region in projected space.
pub fn square_region(min_lon: f64, min_lat: f64, size: f64, metric: f64) -> Region {
    Region::new(
        vec![
            GeoPoint::from_projected(min_lon, min_lat),
            GeoPoint::from_projected(min_lon + size, min_lat),
            GeoPoint::from_projected(min_lon + size, min_lat + size),
            GeoPoint::from_projected(min_lon, min_lat + size),
        ],
        metric,
    )
    .expect("square has four points")
}

/// Boundary CSV text for a grid of one-degree counties named `C{index}` in
/// state `ST`, using raw (unprojected) latitudes.
pub fn create_boundary_csv(cols: usize, rows: usize, origin_lon: f64, origin_lat: f64) -> String {
    let mut csv = String::new();
    for row in 0..rows {
        for col in 0..cols {
            let lon = origin_lon + col as f64;
            let lat = origin_lat + row as f64;
            csv.push_str(&format!(
                "C{},ST,{},{},{},{},{},{},{},{}\n",
                row * cols + col,
                lon,
                lat,
                lon + 1.0,
                lat,
                lon + 1.0,
                lat + 1.0,
                lon,
                lat + 1.0
            ));
        }
    }
    csv
}
