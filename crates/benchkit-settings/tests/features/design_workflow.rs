use benchkit_designer::{GeometryParams, HoleParams};
use benchkit_settings::DesignFile;
use tempfile::TempDir;

#[test]
fn test_saved_design_reproduces_scene() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bench.toml");

    let mut file = DesignFile::default();
    file.holes[0] = HoleParams::new(12.0, 7.0, 2.0);
    file.save_to_file(&path).expect("save");

    let before = file.to_design().expect("design").compute().scene();
    let loaded = DesignFile::load_from_file(&path).expect("load");
    let after = loaded.to_design().expect("design").compute().scene();

    assert_eq!(
        before.to_json().expect("serialize"),
        after.to_json().expect("serialize")
    );
}

#[test]
fn test_geometry_change_resizes_holes() {
    let mut file = DesignFile::default();
    file.geometry = GeometryParams {
        influence_length: 12.0,
        burden: 4.0,
        crest_adjust: 0.0,
        ..GeometryParams::default()
    };

    let layout = file.to_design().expect("design").compute();
    assert_eq!(layout.hole_layout.candidate_count, 3);
    assert_eq!(
        layout.holes.iter().map(|h| h.x).collect::<Vec<_>>(),
        vec![8.0, 4.0]
    );
    assert!(layout
        .holes
        .iter()
        .all(|h| h.params == HoleParams::default()));
}
