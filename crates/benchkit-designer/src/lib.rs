//! # BenchKit Designer
//!
//! Layout engine for bench-and-blasthole blast designs. Turns a small set of
//! bench parameters and per-hole loading into an annotated 2D cross-section,
//! delivered as an ordered list of renderer-agnostic primitives.
//!
//! ## Core Components
//!
//! - **Params**: global bench geometry, per-hole loading, per-hole table
//! - **Hole Layout**: hole count and positions along the crest
//! - **Bench Geometry**: bench outline, toe of slope, slope-angle arc
//! - **Hole Segments**: charge, stemming and water columns per hole
//! - **Annotations**: dimension lines in fixed, non-overlapping lanes
//! - **Scene**: ordered primitives with style tokens and legend flags
//! - **Viewport**: suggested axis window with equal-scale axes
//!
//! ## Usage
//!
//! ```rust
//! use benchkit_designer::{AnnotationRequest, BlastLayout, GeometryParams, HoleParams};
//!
//! let params = GeometryParams::default();
//! let holes = vec![HoleParams::default(); 7];
//! let layout = BlastLayout::compute(&params, &holes, &AnnotationRequest::default_for(7));
//! assert_eq!(layout.hole_count(), 7);
//!
//! let scene = layout.scene();
//! assert!(!scene.is_empty());
//! ```

pub mod annotations;
pub mod bench_geometry;
pub mod design;
pub mod hole_layout;
pub mod hole_segments;
pub mod layout;
pub mod params;
pub mod scene;
pub mod style;
pub mod viewport;

pub use annotations::{
    AnnotationPlanner, AnnotationRequest, DimensionCategory, DimensionSpec, Orientation,
};
pub use bench_geometry::{BenchGeometry, BenchGeometryBuilder, SlopeArc};
pub use design::BlastDesign;
pub use hole_layout::{HoleLayout, HoleLayoutGenerator};
pub use hole_segments::{HoleSegmentCalculator, HoleSegments, Segment};
pub use layout::BlastLayout;
pub use params::{GeometryParams, HoleParams, HoleParamsTable};
pub use scene::{Geometry, LegendGroup, Primitive, Scene, SceneAssembler, TextLabel};
pub use style::{Dash, Rgba, Style, StyleToken};
pub use viewport::ViewWindow;

pub use benchkit_core::{LayoutIssue, Point};
