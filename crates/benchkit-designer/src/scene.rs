//! Scene assembly.
//!
//! Flattens a computed layout into one ordered list of drawable primitives.
//! The list order is the draw order:
//!
//! ```text
//! bench polygon
//! slope arc, angle plate, angle text
//! per hole (index order): outline, charge, stemming, water
//! hole number plates, hole number texts
//! dimensions: main line, two ticks, label
//! ```
//!
//! Water is drawn after charge and stemming so it shows as an overlay.

use benchkit_core::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::annotations::{DimensionCategory, DimensionSpec};
use crate::bench_geometry::{BenchGeometry, SlopeArc};
use crate::hole_segments::{HoleSegments, Segment};
use crate::style::StyleToken;
use crate::viewport::ViewWindow;

/// A single text item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub position: Point,
    pub text: String,
    pub rotation_deg: f64,
    /// Draw a background plate behind the text
    pub plate: bool,
}

/// Geometric payload of a primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Closed, filled outline
    Polygon { points: Vec<Point> },
    /// Open line through the points
    Polyline { points: Vec<Point> },
    /// Square plate markers
    Markers { points: Vec<Point> },
    Text { labels: Vec<TextLabel> },
}

/// Legend grouping of primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendGroup {
    Bench,
    Hole,
    Charge,
    Stemming,
    Water,
    Labels,
    SlopeAngle,
    Dimensions,
}

impl LegendGroup {
    /// Legend entry text, `None` for groups that never appear in the legend.
    pub fn legend_name(&self) -> Option<&'static str> {
        match self {
            LegendGroup::Bench => Some("Bench"),
            LegendGroup::Hole => Some("Blasthole"),
            LegendGroup::Charge => Some("Charge (explosive)"),
            LegendGroup::Stemming => Some("Stemming"),
            LegendGroup::Water => Some("Water"),
            LegendGroup::Labels => Some("Hole no."),
            LegendGroup::SlopeAngle => Some("Slope angle"),
            LegendGroup::Dimensions => None,
        }
    }
}

/// One drawable item handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub geometry: Geometry,
    pub style: StyleToken,
    pub legend_group: LegendGroup,
    pub show_in_legend: bool,
}

impl Primitive {
    pub fn legend_name(&self) -> Option<&'static str> {
        if self.show_in_legend {
            self.legend_group.legend_name()
        } else {
            None
        }
    }
}

/// Ordered primitives plus the suggested view window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub view: ViewWindow,
}

impl Scene {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives belonging to one legend group, in draw order.
    pub fn group(&self, group: LegendGroup) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(move |p| p.legend_group == group)
    }

    /// Legend entries in first-appearance order.
    pub fn legend(&self) -> Vec<&'static str> {
        self.primitives
            .iter()
            .filter_map(Primitive::legend_name)
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds a [`Scene`], marking the first primitive of each legend group.
#[derive(Debug, Default)]
pub struct SceneAssembler {
    primitives: Vec<Primitive>,
    seen: HashSet<LegendGroup>,
}

impl SceneAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the full scene in draw order.
    pub fn assemble(
        bench: &BenchGeometry,
        arc: &SlopeArc,
        holes: &[HoleSegments],
        dimensions: &[DimensionSpec],
        view: ViewWindow,
    ) -> Scene {
        let mut assembler = Self::new();
        assembler.add_bench(bench);
        assembler.add_slope_arc(arc);
        for hole in holes {
            assembler.add_hole(hole);
        }
        assembler.add_hole_numbers(holes);
        for dim in dimensions {
            assembler.add_dimension(dim);
        }
        assembler.finish(view)
    }

    pub fn finish(self, view: ViewWindow) -> Scene {
        tracing::debug!("Assembled scene with {} primitives", self.primitives.len());
        Scene {
            primitives: self.primitives,
            view,
        }
    }

    fn push(&mut self, geometry: Geometry, style: StyleToken, legend_group: LegendGroup) {
        let show_in_legend =
            legend_group.legend_name().is_some() && self.seen.insert(legend_group);
        self.primitives.push(Primitive {
            geometry,
            style,
            legend_group,
            show_in_legend,
        });
    }

    pub fn add_bench(&mut self, bench: &BenchGeometry) {
        self.push(
            Geometry::Polygon {
                points: bench.outline.clone(),
            },
            StyleToken::Bench,
            LegendGroup::Bench,
        );
    }

    pub fn add_slope_arc(&mut self, arc: &SlopeArc) {
        self.push(
            Geometry::Polyline {
                points: arc.points.clone(),
            },
            StyleToken::SlopeArc,
            LegendGroup::SlopeAngle,
        );
        self.push(
            Geometry::Markers {
                points: vec![arc.label_anchor],
            },
            StyleToken::AnglePlate,
            LegendGroup::SlopeAngle,
        );
        self.push(
            Geometry::Text {
                labels: vec![TextLabel {
                    position: arc.label_anchor,
                    text: arc.label.clone(),
                    rotation_deg: 0.0,
                    plate: false,
                }],
            },
            StyleToken::AngleText,
            LegendGroup::SlopeAngle,
        );
    }

    /// Hole outline followed by charge, stemming and the water overlay.
    pub fn add_hole(&mut self, hole: &HoleSegments) {
        self.push(
            rect(hole.x0, hole.x1, hole.hole),
            StyleToken::HoleOutline,
            LegendGroup::Hole,
        );
        if let Some(charge) = hole.charge {
            self.push(
                rect(hole.x0, hole.x1, charge),
                StyleToken::Charge,
                LegendGroup::Charge,
            );
        }
        if let Some(stemming) = hole.stemming {
            self.push(
                rect(hole.x0, hole.x1, stemming),
                StyleToken::Stemming,
                LegendGroup::Stemming,
            );
        }
        if let Some(water) = hole.water {
            self.push(
                rect(hole.x0, hole.x1, water),
                StyleToken::Water,
                LegendGroup::Water,
            );
        }
    }

    /// Number plates and texts for all holes, one primitive each.
    pub fn add_hole_numbers(&mut self, holes: &[HoleSegments]) {
        if holes.is_empty() {
            return;
        }
        let anchors: Vec<Point> = holes.iter().map(HoleSegments::label_anchor).collect();
        let labels = holes
            .iter()
            .map(|h| TextLabel {
                position: h.label_anchor(),
                text: h.number().to_string(),
                rotation_deg: 0.0,
                plate: false,
            })
            .collect();

        self.push(
            Geometry::Markers { points: anchors },
            StyleToken::LabelPlate,
            LegendGroup::Labels,
        );
        self.push(
            Geometry::Text { labels },
            StyleToken::LabelText,
            LegendGroup::Labels,
        );
    }

    pub fn add_dimension(&mut self, dim: &DimensionSpec) {
        let (line, tick) = if dim.category == DimensionCategory::ToeOfSlope {
            (StyleToken::ToeDimensionLine, StyleToken::ToeDimensionTick)
        } else {
            (StyleToken::DimensionLine, StyleToken::DimensionTick)
        };

        self.push(
            Geometry::Polyline {
                points: vec![dim.start, dim.end],
            },
            line,
            LegendGroup::Dimensions,
        );
        for t in &dim.ticks {
            self.push(
                Geometry::Polyline { points: t.to_vec() },
                tick,
                LegendGroup::Dimensions,
            );
        }
        self.push(
            Geometry::Text {
                labels: vec![TextLabel {
                    position: dim.label_anchor,
                    text: dim.label.clone(),
                    rotation_deg: dim.label_rotation_deg,
                    plate: true,
                }],
            },
            StyleToken::DimensionLabel,
            LegendGroup::Dimensions,
        );
    }
}

/// Closed rectangle `[x0, x1] x segment`, traced from the top-left corner.
fn rect(x0: f64, x1: f64, segment: Segment) -> Geometry {
    Geometry::Polygon {
        points: vec![
            Point::new(x0, segment.y1),
            Point::new(x1, segment.y1),
            Point::new(x1, segment.y0),
            Point::new(x0, segment.y0),
            Point::new(x0, segment.y1),
        ],
    }
}
