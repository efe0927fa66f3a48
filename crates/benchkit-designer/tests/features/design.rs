use benchkit_designer::annotations::DimensionCategory;
use benchkit_designer::design::BlastDesign;
use benchkit_designer::params::{GeometryParams, HoleParams};

#[test]
fn test_reference_scenario_end_to_end() {
    let design = BlastDesign::default();
    let layout = design.compute();

    assert_eq!(layout.hole_layout.candidate_count, 7);
    assert_eq!(layout.hole_count(), 7);
    assert_eq!(layout.holes[0].x, 28.0);
    assert_eq!(layout.holes[6].x, 4.0);
    assert!(layout.issues.is_empty());

    let hole = &layout.holes[0];
    assert_eq!(hole.y_top(), 15.0);
    assert_eq!(hole.y_bottom(), 4.0);
    assert_eq!(hole.stemming_length(), 3.0);

    let charge_dims = layout
        .dimensions
        .iter()
        .filter(|d| d.category == DimensionCategory::Charge)
        .count();
    assert_eq!(charge_dims, 2);
    assert!(layout.view.contains(&layout.bench.toe));
}

#[test]
fn test_editing_holes_then_resizing_resets() {
    let mut design = BlastDesign::default();
    design.set_hole(3, HoleParams::new(14.0, 9.0, 2.0));
    assert_eq!(design.compute().holes[3].params.water_length, 2.0);

    let params = GeometryParams {
        influence_length: 60.0,
        ..*design.params()
    };
    assert!(design.set_params(params));
    assert_eq!(design.hole_count(), 15);
    assert!(design.holes().iter().all(|h| *h == HoleParams::default()));
    assert_eq!(design.request().selected_holes.len(), 2);
}

#[test]
fn test_disabling_dimensions_keeps_geometry() {
    let mut design = BlastDesign::default();
    design.request_mut().enabled = false;
    let layout = design.compute();
    assert!(layout.dimensions.is_empty());
    assert_eq!(layout.hole_count(), 7);
}
