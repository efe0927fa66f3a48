//! Suggested view window.
//!
//! The layout reports the axis ranges a renderer should show. Both axes must
//! use the same scale.

use benchkit_core::constants::{
    VIEW_STUDY_MARGIN, VIEW_TOE_MARGIN, VIEW_TOP_MARGIN, VIEW_X_MIN, VIEW_Y_MIN,
};
use benchkit_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::GeometryParams;

/// Axis ranges for displaying a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Renderer must keep a 1:1 aspect ratio between axes
    pub equal_aspect: bool,
}

impl ViewWindow {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            x_range,
            y_range,
            equal_aspect: true,
        }
    }

    /// Window covering the bench, its toe and the dimension margins.
    pub fn for_layout(params: &GeometryParams, toe: Point) -> Self {
        let x_max = (params.study_base_length + VIEW_STUDY_MARGIN).max(toe.x + VIEW_TOE_MARGIN);
        let y_max = params.top_elevation() + VIEW_TOP_MARGIN;
        Self::new((VIEW_X_MIN, x_max), (VIEW_Y_MIN, y_max))
    }

    pub fn width(&self) -> f64 {
        self.x_range.1 - self.x_range.0
    }

    pub fn height(&self) -> f64 {
        self.y_range.1 - self.y_range.0
    }

    pub fn contains(&self, point: &Point) -> bool {
        (self.x_range.0..=self.x_range.1).contains(&point.x)
            && (self.y_range.0..=self.y_range.1).contains(&point.y)
    }
}

impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: [{:.2}, {:.2}] | y: [{:.2}, {:.2}]",
            self.x_range.0, self.x_range.1, self.y_range.0, self.y_range.1
        )
    }
}
