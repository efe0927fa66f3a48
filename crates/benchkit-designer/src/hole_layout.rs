//! Blasthole position generation.
//!
//! Holes are laid out from the crest edge back toward the origin at burden
//! spacing. Candidates whose position falls at or below the tolerance are
//! suppressed rather than clamped.

use benchkit_core::constants::{HOLE_POSITION_TOLERANCE, MAX_HOLE_CANDIDATES};
use benchkit_core::LayoutIssue;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of the hole layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleLayout {
    /// `influence_length / burden` before flooring (0 when undefined)
    pub raw_count: f64,
    /// Number of candidates evaluated (`floor(raw_count)`)
    pub candidate_count: usize,
    /// Surviving positions in generation order (index 0 uses `k = 1`)
    pub positions: Vec<f64>,
}

impl HoleLayout {
    /// Number of holes that survived filtering.
    pub fn hole_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Derives hole positions from the crest parameters.
#[derive(Debug, Clone, Copy)]
pub struct HoleLayoutGenerator {
    influence_length: f64,
    burden: f64,
    crest_adjust: f64,
}

impl HoleLayoutGenerator {
    /// Creates a new generator.
    pub fn new(influence_length: f64, burden: f64, crest_adjust: f64) -> Self {
        Self {
            influence_length,
            burden,
            crest_adjust,
        }
    }

    /// Position of the `k`-th candidate (1-based).
    pub fn candidate_position(&self, k: usize) -> f64 {
        self.influence_length - (self.burden * k as f64 - self.crest_adjust)
    }

    /// Generates the filtered hole positions.
    pub fn generate(&self) -> HoleLayout {
        self.generate_with_issues(&mut Vec::new())
    }

    /// Generates the filtered hole positions, recording a division fallback
    /// or a capped candidate count.
    ///
    /// Dropped candidates are only logged.
    pub fn generate_with_issues(&self, issues: &mut Vec<LayoutIssue>) -> HoleLayout {
        let raw_count = if self.burden > 0.0 && self.burden.is_finite() {
            self.influence_length / self.burden
        } else {
            issues.push(LayoutIssue::DivisionUndefined {
                quantity: "hole count".to_string(),
            });
            0.0
        };

        let candidate_count = if !(raw_count.is_finite() && raw_count > 0.0) {
            0
        } else if raw_count.floor() > MAX_HOLE_CANDIDATES as f64 {
            let issue = LayoutIssue::HoleCountCapped {
                requested: raw_count.floor(),
                cap: MAX_HOLE_CANDIDATES,
            };
            warn!("{}", issue);
            issues.push(issue);
            MAX_HOLE_CANDIDATES
        } else {
            raw_count.floor() as usize
        };

        let mut positions = Vec::with_capacity(candidate_count);
        for k in 1..=candidate_count {
            let x = self.candidate_position(k);
            if x > HOLE_POSITION_TOLERANCE {
                positions.push(x);
            } else {
                debug!("{}", LayoutIssue::DegenerateHolePosition { k, x });
            }
        }

        debug!(
            "Hole layout: raw={:.3}, candidates={}, kept={}",
            raw_count,
            candidate_count,
            positions.len()
        );

        HoleLayout {
            raw_count,
            candidate_count,
            positions,
        }
    }
}
