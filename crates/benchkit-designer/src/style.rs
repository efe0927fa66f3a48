//! Style tokens and the default theme.
//!
//! Primitives carry a [`StyleToken`]; renderers resolve it to concrete
//! colors with [`StyleToken::style`] or their own theme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with a fractional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{:.2})", self.r, self.g, self.b, self.a)
    }
}

const BLACK: Rgba = Rgba::new(0, 0, 0, 0.95);
const PLATE: Rgba = Rgba::new(255, 255, 255, 0.92);
const PLATE_BORDER: Rgba = Rgba::new(0, 0, 0, 0.25);
const ANGLE_RED: Rgba = Rgba::new(220, 0, 0, 0.95);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

/// Concrete stroke and fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_width: f32,
    pub dash: Dash,
}

/// Semantic style of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Bench,
    HoleOutline,
    Charge,
    Stemming,
    Water,
    SlopeArc,
    AngleText,
    /// Plate behind the slope angle text
    AnglePlate,
    LabelPlate,
    LabelText,
    DimensionLine,
    DimensionTick,
    DimensionLabel,
    /// The toe-of-slope limit is drawn in white over the bench fill
    ToeDimensionLine,
    ToeDimensionTick,
}

impl StyleToken {
    /// Resolves the token against the default theme.
    pub fn style(&self) -> Style {
        let (fill, stroke, stroke_width, dash) = match self {
            StyleToken::Bench => (
                Some(Rgba::new(120, 120, 120, 0.50)),
                Some(BLACK),
                2.0,
                Dash::Solid,
            ),
            StyleToken::HoleOutline => (
                Some(Rgba::new(255, 255, 255, 0.10)),
                Some(BLACK),
                1.0,
                Dash::Solid,
            ),
            StyleToken::Charge => {
                let blue = Rgba::new(40, 120, 255, 0.90);
                (Some(blue), Some(blue), 1.0, Dash::Solid)
            }
            StyleToken::Stemming => {
                let orange = Rgba::new(255, 150, 40, 0.92);
                (Some(orange), Some(orange), 1.0, Dash::Solid)
            }
            StyleToken::Water => (
                Some(Rgba::new(0, 200, 255, 0.25)),
                Some(Rgba::new(0, 200, 255, 0.60)),
                1.0,
                Dash::Solid,
            ),
            StyleToken::SlopeArc => (None, Some(ANGLE_RED), 2.0, Dash::Dot),
            StyleToken::AngleText => (Some(ANGLE_RED), None, 0.0, Dash::Solid),
            StyleToken::AnglePlate => (
                Some(Rgba::new(255, 255, 255, 0.85)),
                Some(PLATE_BORDER),
                1.0,
                Dash::Solid,
            ),
            StyleToken::LabelPlate => (
                Some(Rgba::new(255, 255, 255, 0.80)),
                Some(Rgba::new(0, 0, 0, 0.30)),
                1.0,
                Dash::Solid,
            ),
            StyleToken::LabelText => (Some(Rgba::new(0, 0, 0, 1.0)), None, 0.0, Dash::Solid),
            StyleToken::DimensionLine => (None, Some(Rgba::new(0, 0, 0, 1.0)), 2.0, Dash::Dash),
            StyleToken::DimensionTick => (None, Some(Rgba::new(0, 0, 0, 1.0)), 2.0, Dash::Solid),
            StyleToken::DimensionLabel => (Some(PLATE), Some(PLATE_BORDER), 1.0, Dash::Solid),
            StyleToken::ToeDimensionLine => {
                (None, Some(Rgba::new(255, 255, 255, 1.0)), 2.0, Dash::Dash)
            }
            StyleToken::ToeDimensionTick => {
                (None, Some(Rgba::new(255, 255, 255, 1.0)), 2.0, Dash::Solid)
            }
        };
        Style {
            fill,
            stroke,
            stroke_width,
            dash,
        }
    }
}
