//! Dimension annotation planning.
//!
//! Per-hole dimensions are staggered into fixed lanes to the right of the
//! hole, one lane per category, so two dimensions of the same hole never
//! share an x position. Bench-level dimensions sit on the study base and
//! below the diagram.

use benchkit_core::constants::{
    BENCH_LENGTH_DIMENSION_Y, DEFAULT_ANNOTATED_HOLES, DIMENSION_LANE_GAP,
    HORIZONTAL_LABEL_OFFSET, HORIZONTAL_TICK_HALF, LANE_OFFSET_CHARGE, LANE_OFFSET_HOLE,
    LANE_OFFSET_STEMMING, LANE_OFFSET_WATER, VERTICAL_LABEL_OFFSET, VERTICAL_TICK_HALF,
};
use benchkit_core::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::bench_geometry::BenchGeometry;
use crate::hole_segments::{HoleSegments, Segment};
use crate::params::GeometryParams;

/// Quantity a dimension measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionCategory {
    Bench,
    Hole,
    Charge,
    Water,
    Stemming,
    ToeOfSlope,
}

impl DimensionCategory {
    pub const ALL: [DimensionCategory; 6] = [
        DimensionCategory::Bench,
        DimensionCategory::Hole,
        DimensionCategory::Charge,
        DimensionCategory::Water,
        DimensionCategory::Stemming,
        DimensionCategory::ToeOfSlope,
    ];

    /// Offset of this category's lane from the first lane, for per-hole categories.
    pub fn lane_offset(&self) -> Option<f64> {
        match self {
            DimensionCategory::Hole => Some(LANE_OFFSET_HOLE),
            DimensionCategory::Water => Some(LANE_OFFSET_WATER),
            DimensionCategory::Charge => Some(LANE_OFFSET_CHARGE),
            DimensionCategory::Stemming => Some(LANE_OFFSET_STEMMING),
            DimensionCategory::Bench | DimensionCategory::ToeOfSlope => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DimensionCategory::Bench => "Bench",
            DimensionCategory::Hole => "Hole",
            DimensionCategory::Charge => "Charge",
            DimensionCategory::Water => "Water",
            DimensionCategory::Stemming => "Stemming",
            DimensionCategory::ToeOfSlope => "Toe of slope",
        }
    }
}

impl fmt::Display for DimensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DimensionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "bench" => Ok(Self::Bench),
            "hole" => Ok(Self::Hole),
            "charge" => Ok(Self::Charge),
            "water" => Ok(Self::Water),
            "stemming" => Ok(Self::Stemming),
            "toe_of_slope" | "toe" => Ok(Self::ToeOfSlope),
            _ => Err(format!("Unknown dimension category: {}", s)),
        }
    }
}

/// Per-hole lanes in the order they are emitted.
const HOLE_LANES: [DimensionCategory; 4] = [
    DimensionCategory::Hole,
    DimensionCategory::Water,
    DimensionCategory::Charge,
    DimensionCategory::Stemming,
];

/// Which dimensions to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRequest {
    /// Master switch; nothing is annotated when false
    pub enabled: bool,
    pub categories: BTreeSet<DimensionCategory>,
    /// 0-based indices of holes that get per-hole dimensions
    pub selected_holes: BTreeSet<usize>,
}

impl AnnotationRequest {
    /// A request that draws nothing.
    pub fn none() -> Self {
        Self {
            enabled: false,
            categories: BTreeSet::new(),
            selected_holes: BTreeSet::new(),
        }
    }

    /// Every category on every one of `hole_count` holes.
    pub fn all(hole_count: usize) -> Self {
        Self {
            enabled: true,
            categories: DimensionCategory::ALL.into_iter().collect(),
            selected_holes: (0..hole_count).collect(),
        }
    }

    /// Default categories (everything except the whole-hole length) on the
    /// first two holes.
    pub fn default_for(hole_count: usize) -> Self {
        Self {
            enabled: true,
            categories: Self::default_categories(),
            selected_holes: (0..hole_count.min(DEFAULT_ANNOTATED_HOLES)).collect(),
        }
    }

    pub fn default_categories() -> BTreeSet<DimensionCategory> {
        [
            DimensionCategory::Bench,
            DimensionCategory::Charge,
            DimensionCategory::Water,
            DimensionCategory::Stemming,
            DimensionCategory::ToeOfSlope,
        ]
        .into_iter()
        .collect()
    }

    pub fn wants(&self, category: DimensionCategory) -> bool {
        self.enabled && self.categories.contains(&category)
    }

    pub fn wants_hole(&self, index: usize) -> bool {
        self.enabled && self.selected_holes.contains(&index)
    }
}

impl Default for AnnotationRequest {
    fn default() -> Self {
        Self::default_for(DEFAULT_ANNOTATED_HOLES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A placed dimension line with its ticks and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub category: DimensionCategory,
    /// 0-based hole index for per-hole dimensions
    pub hole: Option<usize>,
    pub orientation: Orientation,
    pub start: Point,
    pub end: Point,
    /// End ticks, each a two-point segment perpendicular to the main line
    pub ticks: [[Point; 2]; 2],
    pub label: String,
    pub label_anchor: Point,
    /// Label rotation in degrees (-90 for vertical dimensions)
    pub label_rotation_deg: f64,
}

impl DimensionSpec {
    /// Vertical dimension at `x` spanning `[y0, y1]`, label to the left.
    pub fn vertical(category: DimensionCategory, x: f64, y0: f64, y1: f64, label: String) -> Self {
        let start = Point::new(x, y0);
        let end = Point::new(x, y1);
        Self {
            category,
            hole: None,
            orientation: Orientation::Vertical,
            start,
            end,
            ticks: [
                [
                    start.offset(-VERTICAL_TICK_HALF, 0.0),
                    start.offset(VERTICAL_TICK_HALF, 0.0),
                ],
                [
                    end.offset(-VERTICAL_TICK_HALF, 0.0),
                    end.offset(VERTICAL_TICK_HALF, 0.0),
                ],
            ],
            label,
            label_anchor: start.midpoint(&end).offset(-VERTICAL_LABEL_OFFSET, 0.0),
            label_rotation_deg: -90.0,
        }
    }

    /// Horizontal dimension at `y` spanning `[x0, x1]`, label above.
    pub fn horizontal(
        category: DimensionCategory,
        y: f64,
        x0: f64,
        x1: f64,
        label: String,
    ) -> Self {
        let start = Point::new(x0, y);
        let end = Point::new(x1, y);
        Self {
            category,
            hole: None,
            orientation: Orientation::Horizontal,
            start,
            end,
            ticks: [
                [
                    start.offset(0.0, -HORIZONTAL_TICK_HALF),
                    start.offset(0.0, HORIZONTAL_TICK_HALF),
                ],
                [
                    end.offset(0.0, -HORIZONTAL_TICK_HALF),
                    end.offset(0.0, HORIZONTAL_TICK_HALF),
                ],
            ],
            label,
            label_anchor: start.midpoint(&end).offset(0.0, HORIZONTAL_LABEL_OFFSET),
            label_rotation_deg: 0.0,
        }
    }

    fn for_hole(mut self, index: usize) -> Self {
        self.hole = Some(index);
        self
    }

    /// Measured length.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Places dimension lines for a computed layout.
pub struct AnnotationPlanner<'a> {
    params: &'a GeometryParams,
    request: &'a AnnotationRequest,
}

impl<'a> AnnotationPlanner<'a> {
    pub fn new(params: &'a GeometryParams, request: &'a AnnotationRequest) -> Self {
        Self { params, request }
    }

    /// x of the first lane for a hole centered at `x`.
    pub fn first_lane_x(&self, x: f64) -> f64 {
        x + self.params.hole_thickness + DIMENSION_LANE_GAP
    }

    /// Plans all dimensions: per-hole lanes in hole order, then bench, then toe.
    pub fn plan(&self, holes: &[HoleSegments], bench: &BenchGeometry) -> Vec<DimensionSpec> {
        let mut dims = Vec::new();
        if !self.request.enabled {
            return dims;
        }

        for hole in holes {
            if self.request.wants_hole(hole.index) {
                dims.extend(self.plan_hole(hole));
            }
        }

        let p = self.params;
        if self.request.wants(DimensionCategory::Bench) {
            dims.push(DimensionSpec::vertical(
                DimensionCategory::Bench,
                p.study_base_length,
                p.base_offset,
                p.top_elevation(),
                format!("Bench height = {:.2} m", p.bench_height),
            ));
            dims.push(DimensionSpec::horizontal(
                DimensionCategory::Bench,
                BENCH_LENGTH_DIMENSION_Y,
                0.0,
                p.study_base_length,
                format!("Length = {:.2} m", p.study_base_length),
            ));
        }

        if self.request.wants(DimensionCategory::ToeOfSlope) {
            dims.push(DimensionSpec::horizontal(
                DimensionCategory::ToeOfSlope,
                p.base_offset,
                0.0,
                bench.toe.x,
                "Toe of slope limit".to_string(),
            ));
        }

        tracing::debug!("Planned {} dimensions", dims.len());
        dims
    }

    /// Lanes for one hole, skipping categories not requested or of zero length.
    pub fn plan_hole(&self, hole: &HoleSegments) -> Vec<DimensionSpec> {
        let base_x = self.first_lane_x(hole.x);
        let tag = format!("  (#{})", hole.number());

        HOLE_LANES
            .iter()
            .filter(|category| self.request.wants(**category))
            .filter_map(|&category| {
                let (segment, label) = lane_content(category, hole)?;
                let offset = category.lane_offset()?;
                Some(
                    DimensionSpec::vertical(
                        category,
                        base_x + offset,
                        segment.y0,
                        segment.y1,
                        format!("{}{}", label, tag),
                    )
                    .for_hole(hole.index),
                )
            })
            .collect()
    }
}

fn lane_content(category: DimensionCategory, hole: &HoleSegments) -> Option<(Segment, String)> {
    let p = &hole.params;
    match category {
        DimensionCategory::Hole => Some((hole.hole, format!("Hole length = {:.2} m", p.length))),
        DimensionCategory::Water => hole
            .water
            .map(|s| (s, format!("Water = {:.2} m", p.water_length))),
        DimensionCategory::Charge => hole
            .charge
            .map(|s| (s, format!("Charge = {:.2} m", p.charge_length))),
        DimensionCategory::Stemming => hole
            .stemming
            .map(|s| (s, format!("Stemming = {:.2} m", p.stemming_length()))),
        DimensionCategory::Bench | DimensionCategory::ToeOfSlope => None,
    }
}
