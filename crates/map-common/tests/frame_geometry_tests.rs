//! Tests for frame-level aggregates: bounding boxes and metric ranges.

use map_common::{BoundingBox, GeoPoint, MapError, MetricRange, Region};

fn rect(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64, metric: f64) -> Region {
    Region::new(
        vec![
            GeoPoint::from_projected(min_lon, min_lat),
            GeoPoint::from_projected(max_lon, min_lat),
            GeoPoint::from_projected(max_lon, max_lat),
            GeoPoint::from_projected(min_lon, max_lat),
        ],
        metric,
    )
    .unwrap()
}

// ============================================================================
// BoundingBox::enclosing tests
// ============================================================================

#[test]
fn test_enclosing_single_region() {
    let regions = vec![rect(-123.0, 48.0, -122.0, 50.0, 10.0)];
    let bbox = BoundingBox::enclosing(&regions).unwrap();
    assert_eq!(bbox, BoundingBox::new(-123.0, 48.0, -122.0, 50.0));
    assert_eq!(bbox.lon_span(), 1.0);
    assert_eq!(bbox.lat_span(), 2.0);
}

#[test]
fn test_enclosing_disjoint_regions() {
    let regions = vec![
        rect(-100.0, 30.0, -99.0, 31.0, 5.0),
        rect(-80.0, 40.0, -79.0, 45.0, 25.0),
    ];
    let bbox = BoundingBox::enclosing(&regions).unwrap();
    assert_eq!(bbox.min_lon, -100.0);
    assert_eq!(bbox.max_lon, -79.0);
    assert_eq!(bbox.min_lat, 30.0);
    assert_eq!(bbox.max_lat, 45.0);
    assert!(bbox.contains_point(-90.0, 35.0));
    assert!(!bbox.contains_point(-101.0, 35.0));
}

#[test]
fn test_enclosing_no_regions_fails() {
    let err = BoundingBox::enclosing(&[]).unwrap_err();
    assert!(matches!(err, MapError::EmptyFrame));
}

// ============================================================================
// MetricRange tests
// ============================================================================

#[test]
fn test_metric_range_normalizes_percentages() {
    let regions = vec![
        rect(0.0, 0.0, 1.0, 1.0, 5.0),
        rect(1.0, 0.0, 2.0, 1.0, 25.0),
        rect(2.0, 0.0, 3.0, 1.0, 12.0),
    ];
    let range = MetricRange::from_regions(&regions).unwrap();
    assert!((range.min - 0.05).abs() < 1e-12);
    assert!((range.max - 0.25).abs() < 1e-12);
    assert!((range.mid() - 0.15).abs() < 1e-12);
    assert!(!range.is_degenerate());
}

#[test]
fn test_metric_range_single_value_is_degenerate() {
    let regions = vec![rect(0.0, 0.0, 1.0, 1.0, 12.5)];
    let range = MetricRange::from_regions(&regions).unwrap();
    assert_eq!(range.min, 0.125);
    assert_eq!(range.max, 0.125);
    assert!(range.is_degenerate());
}

#[test]
fn test_metric_range_empty_frame() {
    assert!(matches!(
        MetricRange::from_regions(&[]),
        Err(MapError::EmptyFrame)
    ));
}
