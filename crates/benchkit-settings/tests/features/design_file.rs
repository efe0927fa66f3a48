use benchkit_designer::{DimensionCategory, HoleParams};
use benchkit_settings::{ConfigError, DesignFile, SettingsError};
use tempfile::TempDir;

fn edited_design() -> DesignFile {
    let mut file = DesignFile::default();
    file.geometry.bench_height = 12.5;
    file.holes[2] = HoleParams::new(13.0, 9.5, 1.5);
    file.display.categories.insert(DimensionCategory::Hole);
    file.display.selected_holes = [3, 7].into_iter().collect();
    file
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("design.toml");

    let file = edited_design();
    file.save_to_file(&path).expect("save toml");
    let loaded = DesignFile::load_from_file(&path).expect("load toml");
    assert_eq!(loaded, file);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("design.json");

    let file = edited_design();
    file.save_to_file(&path).expect("save json");
    let loaded = DesignFile::load_from_file(&path).expect("load json");
    assert_eq!(loaded, file);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("design.yaml");

    let err = DesignFile::default().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_partial_toml_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[geometry]\nburden = 5.0\n").expect("write");

    let file = DesignFile::load_from_file(&path).expect("load partial");
    assert_eq!(file.geometry.burden, 5.0);
    assert_eq!(file.geometry.bench_height, 10.0);
    assert!(file.holes.is_empty());

    let design = file.to_design().expect("valid design");
    assert_eq!(design.hole_count(), 6);
    assert_eq!(design.request().selected_holes, [0, 1].into_iter().collect());
}

#[test]
fn test_invalid_geometry_is_rejected_on_load() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"geometry": {"burden": -1.0}}"#).expect("write");

    let err = DesignFile::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parameter(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.toml");

    let err = DesignFile::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(ref msg) if msg.contains("missing.toml")));
}

#[test]
fn test_loaded_design_computes_selected_lanes() {
    let design = edited_design().to_design().expect("valid design");
    let layout = design.compute();

    let holes: Vec<usize> = layout.dimensions.iter().filter_map(|d| d.hole).collect();
    assert!(holes.iter().all(|&h| h == 2 || h == 6));
    assert!(holes.contains(&2));
    assert!(holes.contains(&6));
}
