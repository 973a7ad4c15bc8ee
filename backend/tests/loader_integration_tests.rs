//! Startup loading from files on disk through to the rendered views.

mod support;

use forest_explorer::io::DatasetLoader;
use forest_explorer::models::ParkSelection;
use forest_explorer::services::{get_forest_map, get_visitor_trends};
use forest_explorer::store::{DatasetRepository, InMemoryRepository, StoreError};
use support::write_fixture_files;

#[test]
fn test_loaded_datasets_feed_both_pages() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_fixture_files(dir.path());

    let datasets = DatasetLoader::load(&settings).unwrap();
    let repo = InMemoryRepository::new(datasets);

    // unit-z has no location row and is dropped by the join
    assert_eq!(repo.vegetation_records().len(), 4);
    assert_eq!(repo.available_years(), vec![2001, 2005]);

    let map = get_forest_map(&repo, 2005);
    assert_eq!(map.points.len(), 2);
    assert!(map.points.iter().all(|p| p.spatial_unit_id.as_str() != "unit-z"));

    // The empty Kaziranga cell for 2017 is skipped
    let trends = get_visitor_trends(&repo, &ParkSelection::comparison());
    assert_eq!(trends.point_count(), 5);
    assert_eq!(trends.color_groups(), 2);

    let single = get_visitor_trends(&repo, &ParkSelection::single("Kaziranga"));
    assert_eq!(single.point_count(), 2);
}

#[test]
fn test_checksum_changes_with_content() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_fixture_files(dir.path());
    let before = DatasetLoader::load(&settings).unwrap().checksum;

    std::fs::write(
        &settings.visitors_path,
        "Year,Jim Corbett,Kaziranga\n2016,1,2\n",
    )
    .unwrap();
    let after = DatasetLoader::load(&settings).unwrap().checksum;

    assert_ne!(before, after);
}

#[test]
fn test_missing_visitor_file_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = write_fixture_files(dir.path());
    settings.visitors_path = dir.path().join("absent.csv");

    let result = DatasetLoader::load(&settings);
    assert!(matches!(result, Err(StoreError::Io { .. })));
}
