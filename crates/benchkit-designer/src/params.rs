//! Input parameters for a blast layout.
//!
//! [`GeometryParams`] holds the global bench scalars, [`HoleParams`] the
//! per-hole loading, and [`HoleParamsTable`] the externally owned per-hole
//! collection that is kept in step with the generated hole count.

use benchkit_core::constants::{
    DEFAULT_CHARGE_LENGTH, DEFAULT_HOLE_LENGTH, DEFAULT_WATER_LENGTH,
};
use benchkit_core::ParameterError;
use serde::{Deserialize, Serialize};

/// Global bench geometry (meters and degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// Bench height `h`
    pub bench_height: f64,
    /// Face slope angle in degrees, measured from the horizontal
    pub slope_angle_deg: f64,
    /// Vertical offset of the bench base above the datum
    pub base_offset: f64,
    /// Horizontal extent of the crest considered for hole placement
    pub influence_length: f64,
    /// Horizontal spacing between adjacent holes
    pub burden: f64,
    /// Shift of the hole row toward the crest
    pub crest_adjust: f64,
    /// Total horizontal length of the study section
    pub study_base_length: f64,
    /// Display width of each hole
    pub hole_thickness: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            bench_height: 10.0,
            slope_angle_deg: 65.0,
            base_offset: 5.0,
            influence_length: 30.0,
            burden: 4.0,
            crest_adjust: 2.0,
            study_base_length: 50.0,
            hole_thickness: 0.70,
        }
    }
}

impl GeometryParams {
    /// Elevation of the bench crest (`base_offset + bench_height`).
    pub fn top_elevation(&self) -> f64 {
        self.base_offset + self.bench_height
    }

    /// Checks every field against its domain.
    ///
    /// The layout pipeline does not require this; it resolves degenerate
    /// inputs through fallbacks. Callers loading user data should validate.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ParameterError::check_positive("bench_height", self.bench_height)?;
        ParameterError::check_open_range("slope_angle_deg", self.slope_angle_deg, 0.0, 90.0)?;
        ParameterError::check_non_negative("base_offset", self.base_offset)?;
        ParameterError::check_positive("influence_length", self.influence_length)?;
        ParameterError::check_positive("burden", self.burden)?;
        ParameterError::check_non_negative("crest_adjust", self.crest_adjust)?;
        ParameterError::check_positive("study_base_length", self.study_base_length)?;
        ParameterError::check_positive("hole_thickness", self.hole_thickness)?;
        Ok(())
    }
}

/// Loading of a single hole (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleParams {
    /// Drilled length
    pub length: f64,
    /// Explosive column length, measured from the bottom
    pub charge_length: f64,
    /// Water column length, measured from the bottom
    pub water_length: f64,
}

impl Default for HoleParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_HOLE_LENGTH,
            charge_length: DEFAULT_CHARGE_LENGTH,
            water_length: DEFAULT_WATER_LENGTH,
        }
    }
}

impl HoleParams {
    pub fn new(length: f64, charge_length: f64, water_length: f64) -> Self {
        Self {
            length,
            charge_length,
            water_length,
        }
    }

    /// Inert column above the charge, never negative.
    pub fn stemming_length(&self) -> f64 {
        (self.length - self.charge_length).max(0.0)
    }

    /// True when charge and water both lie within `[0, length]`.
    pub fn is_within_range(&self) -> bool {
        self.length >= 0.0
            && (0.0..=self.length).contains(&self.charge_length)
            && (0.0..=self.length).contains(&self.water_length)
    }

    /// Returns a copy with charge and water clamped into `[0, length]`.
    pub fn clamped(&self) -> Self {
        let length = self.length.max(0.0);
        Self {
            length,
            charge_length: self.charge_length.clamp(0.0, length),
            water_length: self.water_length.clamp(0.0, length),
        }
    }
}

/// Per-hole parameter collection sized to the generated hole count.
///
/// Whenever the hole count changes the whole table is reset to defaults;
/// entries are never carried over by index across a resize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoleParamsTable {
    holes: Vec<HoleParams>,
}

impl HoleParamsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table of `count` default entries.
    pub fn with_len(count: usize) -> Self {
        Self {
            holes: vec![HoleParams::default(); count],
        }
    }

    /// Wraps an existing list as-is.
    pub fn from_vec(holes: Vec<HoleParams>) -> Self {
        Self { holes }
    }

    /// Makes the table hold exactly `count` entries.
    ///
    /// Returns `true` when the table had a different length and was reset.
    pub fn sync_len(&mut self, count: usize) -> bool {
        if self.holes.len() == count {
            return false;
        }
        tracing::debug!(
            "Resetting hole parameter table: {} -> {} entries",
            self.holes.len(),
            count
        );
        self.holes = vec![HoleParams::default(); count];
        true
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HoleParams> {
        self.holes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut HoleParams> {
        self.holes.get_mut(index)
    }

    /// Replaces one entry. Returns `false` if the index is out of range.
    pub fn set(&mut self, index: usize, params: HoleParams) -> bool {
        match self.holes.get_mut(index) {
            Some(slot) => {
                *slot = params;
                true
            }
            None => false,
        }
    }

    /// Clamps charge and water of every entry into `[0, length]`.
    pub fn clamp_all(&mut self) {
        for hole in &mut self.holes {
            *hole = hole.clamped();
        }
    }

    pub fn as_slice(&self) -> &[HoleParams] {
        &self.holes
    }

    pub fn iter(&self) -> impl Iterator<Item = &HoleParams> {
        self.holes.iter()
    }
}
