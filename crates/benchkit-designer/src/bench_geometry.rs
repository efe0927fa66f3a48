//! Bench outline and slope-angle arc.

use benchkit_core::constants::{
    SLOPE_ARC_HEIGHT_FACTOR, SLOPE_ARC_MIN_RADIUS, SLOPE_ARC_SAMPLES, SLOPE_LABEL_ANGLE_FACTOR,
    SLOPE_LABEL_RADIUS_FACTOR,
};
use benchkit_core::{LayoutIssue, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::params::GeometryParams;

/// Closed bench outline plus the derived toe of slope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchGeometry {
    /// Seven vertices, first equal to last
    pub outline: Vec<Point>,
    /// Where the sloped face meets the base
    pub toe: Point,
    /// Horizontal run of the face (`h / tan(angle)`, 0 when undefined)
    pub slope_run: f64,
}

/// Slope-angle indicator anchored at the toe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeArc {
    pub center: Point,
    pub radius: f64,
    /// Swept angle in degrees, starting from the horizontal base
    pub angle_deg: f64,
    /// Sampled arc polyline
    pub points: Vec<Point>,
    /// Anchor of the angle label, outside the arc
    pub label_anchor: Point,
    pub label: String,
}

/// Builds the bench polygon and slope arc from the global parameters.
pub struct BenchGeometryBuilder<'a> {
    params: &'a GeometryParams,
}

impl<'a> BenchGeometryBuilder<'a> {
    pub fn new(params: &'a GeometryParams) -> Self {
        Self { params }
    }

    /// Horizontal run of the sloped face.
    ///
    /// A zero or non-finite tangent is treated as a vertical face.
    pub fn slope_run(&self, issues: &mut Vec<LayoutIssue>) -> f64 {
        let tan = self.params.slope_angle_deg.to_radians().tan();
        if tan == 0.0 || !tan.is_finite() {
            issues.push(LayoutIssue::DivisionUndefined {
                quantity: "slope run".to_string(),
            });
            return 0.0;
        }
        self.params.bench_height / tan
    }

    pub fn build(&self) -> BenchGeometry {
        self.build_with_issues(&mut Vec::new())
    }

    pub fn build_with_issues(&self, issues: &mut Vec<LayoutIssue>) -> BenchGeometry {
        let p = self.params;
        let slope_run = self.slope_run(issues);
        let top = p.top_elevation();
        let toe = Point::new(p.influence_length + slope_run, p.base_offset);

        let outline = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, top),
            Point::new(p.influence_length, top),
            toe,
            Point::new(p.study_base_length, p.base_offset),
            Point::new(p.study_base_length, 0.0),
            Point::new(0.0, 0.0),
        ];

        if p.study_base_length <= toe.x {
            warn!(
                "Study base length {:.2} does not extend past the toe at x={:.2}",
                p.study_base_length, toe.x
            );
        }
        debug!("Bench toe at {}, slope run {:.3}", toe, slope_run);

        BenchGeometry {
            outline,
            toe,
            slope_run,
        }
    }

    /// Builds the slope arc centered on `toe`.
    pub fn slope_arc(&self, toe: Point) -> SlopeArc {
        let angle_deg = self.params.slope_angle_deg;
        let radius = SLOPE_ARC_MIN_RADIUS.max(SLOPE_ARC_HEIGHT_FACTOR * self.params.bench_height);
        let sweep = angle_deg.to_radians();

        let last = (SLOPE_ARC_SAMPLES - 1) as f64;
        let points = (0..SLOPE_ARC_SAMPLES)
            .map(|i| arc_point(toe, radius, sweep * i as f64 / last))
            .collect();

        let label_anchor = arc_point(
            toe,
            radius * SLOPE_LABEL_RADIUS_FACTOR,
            sweep * SLOPE_LABEL_ANGLE_FACTOR,
        );

        SlopeArc {
            center: toe,
            radius,
            angle_deg,
            points,
            label_anchor,
            label: format!("{:.1}°", angle_deg),
        }
    }
}

/// Point at angle `theta` on an arc opening from the base toward the face.
fn arc_point(center: Point, radius: f64, theta: f64) -> Point {
    Point::new(
        center.x - radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}
