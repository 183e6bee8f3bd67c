//! End-to-end frame rendering without network access.

use ingestion::{parse_boundaries, parse_crime_rates, CensusConfig, PovertyTable, SaipeClient};
use poverty_map::{frame, Pipeline, PipelineOptions};
use renderer::compose::load_rgb;
use renderer::ChartConfig;
use tempfile::TempDir;
use test_utils::{CRIME_RATES_CSV, TWO_COUNTY_BOUNDARIES};

// ============================================================================
// Helpers
// ============================================================================

fn pipeline(dir: &TempDir, boundaries: &str, keep_intermediate: bool) -> Pipeline {
    let rows = parse_boundaries(boundaries.as_bytes()).unwrap();
    let crime = parse_crime_rates(CRIME_RATES_CSV.as_bytes(), &(1999..=2002)).unwrap();
    let config = CensusConfig {
        api_key: None,
        ..CensusConfig::default()
    };
    let options = PipelineOptions {
        width: 200,
        output_dir: dir.path().to_path_buf(),
        keep_intermediate,
        chart: ChartConfig::default(),
    };
    Pipeline::new(SaipeClient::new(config).unwrap(), rows, crime, options)
}

fn table() -> PovertyTable {
    let mut table = PovertyTable::new();
    table.insert("OR", "Lane", 5.0);
    table.insert("OR", "Linn", 25.0);
    table
}

// ============================================================================
// Single frame
// ============================================================================

#[test]
fn test_frame_is_stitched_and_intermediates_removed() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(&dir, TWO_COUNTY_BOUNDARIES, false);

    let path = pipeline.render_year(2000, &(1999..=2002), &table()).unwrap();
    assert_eq!(path, dir.path().join("2000stitched.png"));

    let stitched = load_rgb(&path).unwrap();
    assert_eq!(stitched.width(), 200 + 640);
    assert_eq!(stitched.height(), 480);

    assert!(!dir.path().join(frame::map_filename(2000)).exists());
    assert!(!dir.path().join(frame::graph_filename(2000)).exists());
}

#[test]
fn test_keep_intermediate() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(&dir, TWO_COUNTY_BOUNDARIES, true);

    pipeline.render_year(2001, &(1999..=2002), &table()).unwrap();

    let map = load_rgb(dir.path().join("2001map_output.png")).unwrap();
    let graph = load_rgb(dir.path().join("2001graph_output.png")).unwrap();
    assert_eq!(map.width(), 200);
    assert_eq!((graph.width(), graph.height()), (640, 480));
}

#[test]
fn test_stitched_map_half_matches_map() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(&dir, TWO_COUNTY_BOUNDARIES, true);

    let path = pipeline.render_year(1999, &(1999..=2002), &table()).unwrap();
    let stitched = load_rgb(path).unwrap();
    let map = load_rgb(dir.path().join("1999map_output.png")).unwrap();

    for y in 0..map.height() {
        for x in 0..map.width() {
            assert_eq!(stitched.get_pixel(x, y), map.get_pixel(x, y));
        }
    }
    // Below the shorter map the background stays black
    assert_eq!(stitched.get_pixel(0, 479).0, [0, 0, 0]);
}

#[test]
fn test_bad_boundary_row_fails_frame() {
    let dir = tempfile::tempdir().unwrap();
    let odd = "Lane,OR,-123.0,44.0,-122.0,44.0,-122.0\n";
    let pipeline = pipeline(&dir, odd, false);

    assert!(pipeline.render_year(2000, &(1999..=2002), &table()).is_err());
    assert!(!dir.path().join("2000stitched.png").exists());
}

#[test]
fn test_failed_stitch_removes_intermediates() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(&dir, TWO_COUNTY_BOUNDARIES, false);

    // A directory in the way of the stitched file makes the final write fail
    // after the map and graph are already on disk.
    std::fs::create_dir(dir.path().join(frame::stitched_filename(2000))).unwrap();

    assert!(pipeline.render_year(2000, &(1999..=2002), &table()).is_err());
    assert!(!dir.path().join(frame::map_filename(2000)).exists());
    assert!(!dir.path().join(frame::graph_filename(2000)).exists());
}

#[test]
fn test_failed_map_leaves_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(&dir, "", false);

    assert!(pipeline.render_year(2000, &(1999..=2002), &table()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// ============================================================================
// Driver
// ============================================================================

#[tokio::test]
async fn test_run_reports_failed_years_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(&dir, TWO_COUNTY_BOUNDARIES, false);

    // No API key, so every fetch fails before any request is made.
    let summary = pipeline.run(2000..=2002).await;
    assert!(!summary.is_success());
    assert!(summary.frames.is_empty());
    assert_eq!(summary.failed, vec![2000, 2001, 2002]);
}

#[test]
fn test_grid_frame_colors_follow_rates() {
    let dir = tempfile::tempdir().unwrap();
    let boundaries = test_utils::create_boundary_csv(4, 2, -100.0, 40.0);
    let pipeline = pipeline(&dir, &boundaries, true);

    let mut table = PovertyTable::new();
    for i in 0..8 {
        table.insert("ST", &format!("C{}", i), i as f64 * 5.0);
    }
    pipeline.render_year(2002, &(1999..=2002), &table).unwrap();

    let map = load_rgb(dir.path().join("2002map_output.png")).unwrap();
    assert_eq!(map.width(), 200);
    // C0 is the lowest rate (bottom-left, blue), C7 the highest (top-right, red).
    let bottom_left = map.get_pixel(25, map.height() - 25).0;
    let top_right = map.get_pixel(175, 25).0;
    assert_eq!(bottom_left, [0, 0, 255]);
    assert_eq!(top_right, [255, 0, 0]);
}
