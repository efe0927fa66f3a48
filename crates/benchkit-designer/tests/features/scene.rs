use benchkit_designer::annotations::AnnotationRequest;
use benchkit_designer::layout::BlastLayout;
use benchkit_designer::params::{GeometryParams, HoleParams};
use benchkit_designer::scene::{Geometry, LegendGroup};
use benchkit_designer::style::StyleToken;

fn reference_scene(holes: Vec<HoleParams>) -> benchkit_designer::Scene {
    let request = AnnotationRequest::default_for(holes.len());
    BlastLayout::compute(&GeometryParams::default(), &holes, &request).scene()
}

#[test]
fn test_bench_is_drawn_first() {
    let scene = reference_scene(vec![HoleParams::default(); 7]);
    let first = &scene.primitives[0];
    assert_eq!(first.style, StyleToken::Bench);
    assert!(matches!(&first.geometry, Geometry::Polygon { points } if points.len() == 7));
}

#[test]
fn test_water_drawn_after_charge_and_stemming() {
    let scene = reference_scene(vec![HoleParams::new(11.0, 8.0, 3.0); 7]);
    let tokens: Vec<StyleToken> = scene.primitives.iter().map(|p| p.style).collect();

    let outline = tokens
        .iter()
        .position(|t| *t == StyleToken::HoleOutline)
        .expect("hole outline present");
    assert_eq!(
        &tokens[outline..outline + 4],
        &[
            StyleToken::HoleOutline,
            StyleToken::Charge,
            StyleToken::Stemming,
            StyleToken::Water,
        ]
    );
}

#[test]
fn test_legend_lists_each_group_once() {
    let scene = reference_scene(vec![HoleParams::new(11.0, 8.0, 3.0); 7]);
    let legend = scene.legend();

    let mut deduped = legend.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), legend.len());

    assert!(legend.contains(&"Bench"));
    assert!(legend.contains(&"Water"));
    assert!(scene
        .group(LegendGroup::Dimensions)
        .all(|p| !p.show_in_legend));
}

#[test]
fn test_hole_numbers_cover_every_hole() {
    let scene = reference_scene(vec![HoleParams::default(); 7]);
    let texts: Vec<String> = scene
        .group(LegendGroup::Labels)
        .filter_map(|p| match &p.geometry {
            Geometry::Text { labels } => Some(labels.iter().map(|l| l.text.clone()).collect::<Vec<_>>()),
            _ => None,
        })
        .flatten()
        .collect();
    let expected: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
    assert_eq!(texts, expected);
}

#[test]
fn test_toe_dimension_uses_toe_style() {
    let scene = reference_scene(vec![HoleParams::default(); 7]);
    assert!(scene
        .primitives
        .iter()
        .any(|p| p.style == StyleToken::ToeDimensionLine));
    assert_eq!(
        scene.primitives.last().map(|p| p.style),
        Some(StyleToken::DimensionLabel)
    );
}

#[test]
fn test_recompute_is_deterministic() {
    let holes = vec![HoleParams::new(12.0, 7.5, 1.0); 7];
    let a = reference_scene(holes.clone()).to_json().expect("serialize");
    let b = reference_scene(holes).to_json().expect("serialize");
    assert_eq!(a, b);
}

#[test]
fn test_angle_and_hole_number_plates_use_separate_styles() {
    let scene = reference_scene(vec![HoleParams::default(); 7]);
    let angle_plate = scene
        .group(LegendGroup::SlopeAngle)
        .find(|p| matches!(p.geometry, Geometry::Markers { .. }))
        .map(|p| p.style);
    let number_plate = scene
        .group(LegendGroup::Labels)
        .find(|p| matches!(p.geometry, Geometry::Markers { .. }))
        .map(|p| p.style);
    assert_eq!(angle_plate, Some(StyleToken::AnglePlate));
    assert_eq!(number_plate, Some(StyleToken::LabelPlate));
}
