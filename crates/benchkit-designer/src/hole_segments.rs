//! Vertical extents of each hole and its charge, stemming and water columns.
//!
//! Charge fills from the hole bottom upward and stemming fills the rest up to
//! the crest. Water is an overlay anchored at the bottom; it does not displace
//! charge or stemming.

use benchkit_core::{LayoutIssue, Point};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::params::HoleParams;

/// Closed vertical interval `[y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub y0: f64,
    pub y1: f64,
}

impl Segment {
    pub fn new(y0: f64, y1: f64) -> Self {
        Self { y0, y1 }
    }

    pub fn length(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn midpoint(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }
}

/// Geometry of one hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSegments {
    /// 0-based hole index
    pub index: usize,
    /// Hole center line
    pub x: f64,
    /// Left edge (`x - thickness/2`)
    pub x0: f64,
    /// Right edge (`x + thickness/2`)
    pub x1: f64,
    /// Whole hole, bottom to crest
    pub hole: Segment,
    pub charge: Option<Segment>,
    pub stemming: Option<Segment>,
    pub water: Option<Segment>,
    /// Parameters after range clamping
    pub params: HoleParams,
}

impl HoleSegments {
    /// 1-based number shown on the diagram.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn y_bottom(&self) -> f64 {
        self.hole.y0
    }

    pub fn y_top(&self) -> f64 {
        self.hole.y1
    }

    pub fn stemming_length(&self) -> f64 {
        self.params.stemming_length()
    }

    /// Anchor for the hole number label.
    pub fn label_anchor(&self) -> Point {
        Point::new(self.x, self.hole.midpoint())
    }
}

/// Computes per-hole segments at a fixed crest elevation and hole width.
#[derive(Debug, Clone, Copy)]
pub struct HoleSegmentCalculator {
    y_top: f64,
    thickness: f64,
}

impl HoleSegmentCalculator {
    pub fn new(y_top: f64, thickness: f64) -> Self {
        Self { y_top, thickness }
    }

    /// Computes the segments for one hole.
    ///
    /// Out-of-range charge or water lengths are clamped into `[0, length]`,
    /// each clamp is logged and recorded in `issues`.
    pub fn compute(
        &self,
        index: usize,
        x: f64,
        params: &HoleParams,
        issues: &mut Vec<LayoutIssue>,
    ) -> HoleSegments {
        let params = self.checked_params(index, params, issues);

        let half = self.thickness / 2.0;
        let y_bottom = self.y_top - params.length;
        let charge_top = y_bottom + params.charge_length;

        let charge = (params.charge_length > 0.0).then(|| Segment::new(y_bottom, charge_top));
        let stemming =
            (params.stemming_length() > 0.0).then(|| Segment::new(charge_top, self.y_top));
        let water = (params.water_length > 0.0)
            .then(|| Segment::new(y_bottom, y_bottom + params.water_length));

        HoleSegments {
            index,
            x,
            x0: x - half,
            x1: x + half,
            hole: Segment::new(y_bottom, self.y_top),
            charge,
            stemming,
            water,
            params,
        }
    }

    /// Computes segments for every position, pairing by index.
    ///
    /// Positions without a parameter entry use [`HoleParams::default`].
    pub fn compute_all(
        &self,
        positions: &[f64],
        holes: &[HoleParams],
        issues: &mut Vec<LayoutIssue>,
    ) -> Vec<HoleSegments> {
        if holes.len() != positions.len() {
            warn!(
                "Hole parameter count {} does not match hole count {}",
                holes.len(),
                positions.len()
            );
        }
        positions
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let params = holes.get(i).copied().unwrap_or_default();
                self.compute(i, x, &params, issues)
            })
            .collect()
    }

    fn checked_params(
        &self,
        index: usize,
        params: &HoleParams,
        issues: &mut Vec<LayoutIssue>,
    ) -> HoleParams {
        if params.is_within_range() {
            return *params;
        }
        let clamped = params.clamped();
        let fields = [
            ("length", params.length, clamped.length),
            ("charge_length", params.charge_length, clamped.charge_length),
            ("water_length", params.water_length, clamped.water_length),
        ];
        for (field, value, fixed) in fields {
            if value != fixed {
                let issue = LayoutIssue::InvalidSegmentRange {
                    hole: index + 1,
                    field: field.to_string(),
                    value,
                    length: clamped.length,
                };
                warn!("{}", issue);
                issues.push(issue);
            }
        }
        clamped
    }
}
