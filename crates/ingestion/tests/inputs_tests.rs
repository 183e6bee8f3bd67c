//! Tests for loading boundaries, poverty rates and crime rates together.

use ingestion::crime::{PROPERTY_CRIME_RATE, VIOLENT_CRIME_RATE};
use ingestion::{read_boundaries, read_crime_rates, CensusConfig, PovertyTable};
use test_utils::{
    temp_output_dir, write_fixture, CRIME_RATES_CSV, SAIPE_RESPONSE, TWO_COUNTY_BOUNDARIES,
};

#[test]
fn test_boundaries_match_saipe_counties() {
    let dir = temp_output_dir();
    let path = write_fixture(&dir, "US.csv", TWO_COUNTY_BOUNDARIES);
    let rows = read_boundaries(&path).unwrap();
    let table = PovertyTable::from_json(SAIPE_RESPONSE, &CensusConfig::default()).unwrap();

    let metrics: Vec<f64> = rows
        .iter()
        .map(|row| table.metric_for(&row.state, &row.county))
        .collect();
    assert_eq!(metrics, vec![5.0, 25.0]);
}

#[test]
fn test_saipe_excluded_states_dropped() {
    let table = PovertyTable::from_json(SAIPE_RESPONSE, &CensusConfig::default()).unwrap();
    assert_eq!(table.lookup("AK", "Anchorage"), None);
    assert_eq!(table.lookup("MO", "St. Louis"), Some(27.4));
    assert_eq!(table.len(), 3);

    let keep_all = CensusConfig {
        excluded_states: Vec::new(),
        ..CensusConfig::default()
    };
    let table = PovertyTable::from_json(SAIPE_RESPONSE, &keep_all).unwrap();
    assert_eq!(table.lookup("AK", "Anchorage"), Some(8.1));
}

#[test]
fn test_saipe_malformed_json() {
    assert!(PovertyTable::from_json("{\"error\": true}", &CensusConfig::default()).is_err());
}

#[test]
fn test_boundary_rows_become_projected_regions() {
    let dir = temp_output_dir();
    let path = write_fixture(&dir, "US.csv", TWO_COUNTY_BOUNDARIES);
    let rows = read_boundaries(&path).unwrap();

    let region = rows[0].to_region(5.0).unwrap();
    assert_eq!(region.coords().len(), 4);
    assert_eq!(region.min_lon(), -123.0);
    assert!((region.min_lat() - projection::project_latitude(44.0)).abs() < 1e-12);
    assert_eq!(region.metric(), 5.0);
}

#[test]
fn test_crime_rates_for_range() {
    let dir = temp_output_dir();
    let path = write_fixture(&dir, "USCrimeRates.csv", CRIME_RATES_CSV);
    let series = read_crime_rates(&path, &(2000..=2002)).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, VIOLENT_CRIME_RATE);
    assert_eq!(series[1].name, PROPERTY_CRIME_RATE);
    assert_eq!(
        series[0].points,
        vec![(2000, 506.5), (2001, 504.5), (2002, 494.4)]
    );
    assert_eq!(series[1].value_at(2001), Some(3658.1));
}

#[test]
fn test_missing_boundary_file() {
    let dir = temp_output_dir();
    assert!(read_boundaries(dir.path().join("nope.csv")).is_err());
}

#[test]
fn test_lane_row_projects_each_corner() {
    let rows = ingestion::parse_boundaries(test_utils::LANE_OR_ROW.as_bytes()).unwrap();
    let region = rows[0].to_region(12.5).unwrap();

    for (point, &(lon, lat)) in region.coords().iter().zip(test_utils::LANE_OR_PAIRS.iter()) {
        test_utils::assert_approx_eq!(point.lon(), lon, 1e-12);
        test_utils::assert_approx_eq!(point.lat(), projection::project_latitude(lat), 1e-12);
    }
}
