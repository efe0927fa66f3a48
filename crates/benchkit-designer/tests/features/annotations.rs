use benchkit_designer::annotations::{
    AnnotationPlanner, AnnotationRequest, DimensionCategory, Orientation,
};
use benchkit_designer::bench_geometry::BenchGeometryBuilder;
use benchkit_designer::hole_segments::HoleSegmentCalculator;
use benchkit_designer::params::{GeometryParams, HoleParams};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn plan_for(
    params: &GeometryParams,
    holes: &[(f64, HoleParams)],
    request: &AnnotationRequest,
) -> Vec<benchkit_designer::DimensionSpec> {
    let bench = BenchGeometryBuilder::new(params).build();
    let calc = HoleSegmentCalculator::new(params.top_elevation(), params.hole_thickness);
    let segments: Vec<_> = holes
        .iter()
        .enumerate()
        .map(|(i, (x, p))| calc.compute(i, *x, p, &mut Vec::new()))
        .collect();
    AnnotationPlanner::new(params, request).plan(&segments, &bench)
}

#[test]
fn test_lanes_never_overlap_across_selected_holes() {
    let params = GeometryParams::default();
    let holes = [
        (28.0, HoleParams::new(11.0, 6.0, 2.0)),
        (24.0, HoleParams::new(11.0, 6.0, 2.0)),
    ];
    let request = AnnotationRequest::all(2);
    let dims = plan_for(&params, &holes, &request);

    for hole in 0..2 {
        let xs: Vec<f64> = dims
            .iter()
            .filter(|d| d.hole == Some(hole))
            .map(|d| d.start.x)
            .collect();
        assert_eq!(xs.len(), 4);
        for pair in xs.windows(2) {
            assert!(close(pair[1] - pair[0], 1.1));
        }
        assert!(xs.iter().all(|&x| x > holes[hole].0 + params.hole_thickness));
    }
}

#[test]
fn test_lane_order_is_hole_water_charge_stemming() {
    let params = GeometryParams::default();
    let holes = [(28.0, HoleParams::new(11.0, 6.0, 2.0))];
    let dims = plan_for(&params, &holes, &AnnotationRequest::all(1));

    let categories: Vec<DimensionCategory> = dims
        .iter()
        .filter(|d| d.hole.is_some())
        .map(|d| d.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            DimensionCategory::Hole,
            DimensionCategory::Water,
            DimensionCategory::Charge,
            DimensionCategory::Stemming,
        ]
    );
    assert_eq!(dims[1].label, "Water = 2.00 m  (#1)");
    assert_eq!(dims[3].label, "Stemming = 5.00 m  (#1)");
}

#[test]
fn test_unselected_holes_get_no_lanes() {
    let params = GeometryParams::default();
    let holes = [
        (28.0, HoleParams::default()),
        (24.0, HoleParams::default()),
        (20.0, HoleParams::default()),
    ];
    let mut request = AnnotationRequest::default_for(3);
    request.selected_holes = [2].into_iter().collect();
    let dims = plan_for(&params, &holes, &request);

    assert!(dims.iter().filter_map(|d| d.hole).all(|h| h == 2));
    assert_eq!(dims.iter().filter(|d| d.hole.is_some()).count(), 2);
}

#[test]
fn test_bench_and_toe_dimensions() {
    let params = GeometryParams::default();
    let mut request = AnnotationRequest::none();
    request.enabled = true;
    request.categories = [DimensionCategory::Bench, DimensionCategory::ToeOfSlope]
        .into_iter()
        .collect();
    let dims = plan_for(&params, &[], &request);
    assert_eq!(dims.len(), 3);

    let height = &dims[0];
    assert_eq!(height.orientation, Orientation::Vertical);
    assert_eq!(height.start.x, 50.0);
    assert_eq!((height.start.y, height.end.y), (5.0, 15.0));
    assert_eq!(height.label, "Bench height = 10.00 m");
    assert_eq!(height.label_rotation_deg, -90.0);

    let length = &dims[1];
    assert_eq!(length.orientation, Orientation::Horizontal);
    assert_eq!((length.start.y, length.end.y), (-1.2, -1.2));
    assert_eq!((length.start.x, length.end.x), (0.0, 50.0));
    assert_eq!(length.label, "Length = 50.00 m");

    let toe = &dims[2];
    assert_eq!(toe.category, DimensionCategory::ToeOfSlope);
    assert_eq!(toe.start.y, 5.0);
    assert!(close(toe.end.x, 30.0 + 10.0 / 65f64.to_radians().tan()));
    assert_eq!(toe.label, "Toe of slope limit");
}

#[test]
fn test_master_switch_off_draws_nothing() {
    let params = GeometryParams::default();
    let holes = [(28.0, HoleParams::default())];
    let mut request = AnnotationRequest::all(1);
    request.enabled = false;
    assert!(plan_for(&params, &holes, &request).is_empty());
}
