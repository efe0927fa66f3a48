use benchkit_designer::bench_geometry::BenchGeometryBuilder;
use benchkit_designer::params::GeometryParams;
use benchkit_designer::{LayoutIssue, Point};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_reference_outline_is_closed() {
    let params = GeometryParams::default();
    let bench = BenchGeometryBuilder::new(&params).build();

    assert_eq!(bench.outline.len(), 7);
    assert_eq!(bench.outline.first(), bench.outline.last());
    assert_eq!(bench.outline[1], Point::new(0.0, 15.0));
    assert_eq!(bench.outline[2], Point::new(30.0, 15.0));
    assert_eq!(bench.outline[4], Point::new(50.0, 5.0));
    assert_eq!(bench.outline[5], Point::new(50.0, 0.0));

    let expected_run = 10.0 / 65f64.to_radians().tan();
    assert!(close(bench.slope_run, expected_run));
    assert!(close(bench.toe.x, 30.0 + expected_run));
    assert_eq!(bench.toe.y, 5.0);
}

#[test]
fn test_flat_angle_falls_back_to_zero_run() {
    let params = GeometryParams {
        slope_angle_deg: 0.0,
        ..GeometryParams::default()
    };
    let mut issues = Vec::new();
    let bench = BenchGeometryBuilder::new(&params).build_with_issues(&mut issues);

    assert_eq!(bench.slope_run, 0.0);
    assert_eq!(bench.toe, Point::new(30.0, 5.0));
    assert!(matches!(
        issues.as_slice(),
        [LayoutIssue::DivisionUndefined { .. }]
    ));
}

#[test]
fn test_vertical_face_puts_toe_under_crest() {
    let params = GeometryParams {
        slope_angle_deg: 90.0,
        ..GeometryParams::default()
    };
    let bench = BenchGeometryBuilder::new(&params).build();
    assert!(close(bench.toe.x, params.influence_length));
    assert_eq!(bench.outline.len(), 7);
}

#[test]
fn test_arc_samples_and_label() {
    let params = GeometryParams::default();
    let builder = BenchGeometryBuilder::new(&params);
    let bench = builder.build();
    let arc = builder.slope_arc(bench.toe);

    assert_eq!(arc.points.len(), 60);
    assert_eq!(arc.label, "65.0°");
    assert!(close(arc.radius, 1.8));

    // first sample lies on the base, left of the toe
    assert!(close(arc.points[0].x, bench.toe.x - arc.radius));
    assert!(close(arc.points[0].y, bench.toe.y));

    let last = arc.points[59];
    let sweep = 65f64.to_radians();
    assert!(close(last.x, bench.toe.x - arc.radius * sweep.cos()));
    assert!(close(last.y, bench.toe.y + arc.radius * sweep.sin()));

    let theta = sweep * 0.55;
    assert!(close(arc.label_anchor.x, bench.toe.x - 1.25 * arc.radius * theta.cos()));
    assert!(close(arc.label_anchor.y, bench.toe.y + 1.25 * arc.radius * theta.sin()));
}

#[test]
fn test_small_bench_uses_minimum_radius() {
    let params = GeometryParams {
        bench_height: 4.0,
        ..GeometryParams::default()
    };
    let builder = BenchGeometryBuilder::new(&params);
    let arc = builder.slope_arc(builder.build().toe);
    assert_eq!(arc.radius, 1.5);
}

proptest! {
    #[test]
    fn prop_arc_points_on_circle(
        height in 2.0f64..30.0,
        angle in 30.0f64..85.0,
    ) {
        let params = GeometryParams {
            bench_height: height,
            slope_angle_deg: angle,
            ..GeometryParams::default()
        };
        let builder = BenchGeometryBuilder::new(&params);
        let bench = builder.build();
        let arc = builder.slope_arc(bench.toe);

        prop_assert!(arc.radius >= 1.5);
        for p in &arc.points {
            prop_assert!((p.distance_to(&arc.center) - arc.radius).abs() < 1e-9);
        }
        prop_assert!(bench.slope_run > 0.0);
    }
}
