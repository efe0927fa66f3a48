//! Full layout pipeline.
//!
//! ```text
//! GeometryParams ──┬── HoleLayoutGenerator ──┐
//!                  └── BenchGeometryBuilder ─┴── HoleSegmentCalculator
//!                                                  └── AnnotationPlanner
//!                                                        └── SceneAssembler
//! ```
//!
//! Every invocation recomputes everything from the inputs; the result owns
//! all derived geometry and nothing is shared between invocations.

use benchkit_core::LayoutIssue;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotations::{AnnotationPlanner, AnnotationRequest, DimensionSpec};
use crate::bench_geometry::{BenchGeometry, BenchGeometryBuilder, SlopeArc};
use crate::hole_layout::{HoleLayout, HoleLayoutGenerator};
use crate::hole_segments::{HoleSegmentCalculator, HoleSegments};
use crate::params::{GeometryParams, HoleParams};
use crate::scene::{Scene, SceneAssembler};
use crate::viewport::ViewWindow;

/// Everything derived from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastLayout {
    pub params: GeometryParams,
    pub hole_layout: HoleLayout,
    pub bench: BenchGeometry,
    pub slope_arc: SlopeArc,
    pub holes: Vec<HoleSegments>,
    pub dimensions: Vec<DimensionSpec>,
    pub view: ViewWindow,
    /// Recoverable conditions resolved by fallback during this pass
    pub issues: Vec<LayoutIssue>,
}

impl BlastLayout {
    /// Runs the whole pipeline.
    ///
    /// `holes` is paired with the generated positions by index; missing
    /// entries use defaults and surplus entries are ignored.
    pub fn compute(
        params: &GeometryParams,
        holes: &[HoleParams],
        request: &AnnotationRequest,
    ) -> Self {
        let mut issues = Vec::new();

        let hole_layout = HoleLayoutGenerator::new(
            params.influence_length,
            params.burden,
            params.crest_adjust,
        )
        .generate_with_issues(&mut issues);

        let builder = BenchGeometryBuilder::new(params);
        let bench = builder.build_with_issues(&mut issues);
        let slope_arc = builder.slope_arc(bench.toe);

        let segments = HoleSegmentCalculator::new(params.top_elevation(), params.hole_thickness)
            .compute_all(&hole_layout.positions, holes, &mut issues);

        let dimensions = AnnotationPlanner::new(params, request).plan(&segments, &bench);
        let view = ViewWindow::for_layout(params, bench.toe);

        debug!(
            "Layout computed: {} holes, {} dimensions, {} issues",
            segments.len(),
            dimensions.len(),
            issues.len()
        );

        Self {
            params: *params,
            hole_layout,
            bench,
            slope_arc,
            holes: segments,
            dimensions,
            view,
            issues,
        }
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Flattens the layout into the ordered primitive list.
    pub fn scene(&self) -> Scene {
        SceneAssembler::assemble(
            &self.bench,
            &self.slope_arc,
            &self.holes,
            &self.dimensions,
            self.view,
        )
    }
}
