//! Editable blast design state.
//!
//! [`BlastDesign`] owns the mutable inputs between layout passes: the global
//! parameters, the per-hole table and the annotation request. Changing the
//! global parameters re-derives the hole count and resets the per-hole table
//! when that count changes.

use benchkit_core::Result;
use tracing::debug;

use crate::annotations::AnnotationRequest;
use crate::hole_layout::HoleLayoutGenerator;
use crate::layout::BlastLayout;
use crate::params::{GeometryParams, HoleParams, HoleParamsTable};

#[derive(Debug, Clone)]
pub struct BlastDesign {
    params: GeometryParams,
    holes: HoleParamsTable,
    request: AnnotationRequest,
}

impl Default for BlastDesign {
    fn default() -> Self {
        Self::new(GeometryParams::default())
    }
}

impl BlastDesign {
    /// Creates a design with default hole parameters and annotations.
    pub fn new(params: GeometryParams) -> Self {
        let count = Self::hole_count_for(&params);
        Self {
            params,
            holes: HoleParamsTable::with_len(count),
            request: AnnotationRequest::default_for(count),
        }
    }

    /// Creates a design from stored values.
    ///
    /// The stored hole list is kept only if its length matches the derived
    /// hole count; otherwise it is reset.
    pub fn from_parts(
        params: GeometryParams,
        holes: Vec<HoleParams>,
        request: AnnotationRequest,
    ) -> Self {
        let mut table = HoleParamsTable::from_vec(holes);
        table.sync_len(Self::hole_count_for(&params));
        table.clamp_all();
        Self {
            params,
            holes: table,
            request,
        }
    }

    /// Like [`BlastDesign::from_parts`], but rejects parameters outside
    /// their domain instead of relying on layout fallbacks.
    pub fn try_from_parts(
        params: GeometryParams,
        holes: Vec<HoleParams>,
        request: AnnotationRequest,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_parts(params, holes, request))
    }

    fn hole_count_for(params: &GeometryParams) -> usize {
        HoleLayoutGenerator::new(params.influence_length, params.burden, params.crest_adjust)
            .generate()
            .hole_count()
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    /// Replaces the global parameters.
    ///
    /// Returns `true` when the hole count changed and the per-hole table and
    /// hole selection were reset.
    pub fn set_params(&mut self, params: GeometryParams) -> bool {
        self.params = params;
        let count = Self::hole_count_for(&params);
        let reset = self.holes.sync_len(count);
        if reset {
            debug!("Hole count changed to {}, resetting hole selection", count);
            self.request.selected_holes = AnnotationRequest::default_for(count).selected_holes;
        }
        reset
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn holes(&self) -> &HoleParamsTable {
        &self.holes
    }

    /// Updates one hole, clamping charge and water into `[0, length]`.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn set_hole(&mut self, index: usize, params: HoleParams) -> bool {
        self.holes.set(index, params.clamped())
    }

    pub fn request(&self) -> &AnnotationRequest {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut AnnotationRequest {
        &mut self.request
    }

    /// Runs the layout pipeline on the current snapshot.
    pub fn compute(&self) -> BlastLayout {
        BlastLayout::compute(&self.params, self.holes.as_slice(), &self.request)
    }
}
