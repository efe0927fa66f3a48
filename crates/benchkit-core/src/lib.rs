//! # BenchKit Core
//!
//! Core types, constants and error handling for BenchKit.
//! Provides the plane point type shared by the layout engine and the
//! settings layer, the fixed layout constants, and the error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{Error, LayoutIssue, ParameterError, Result};
pub use geometry::Point;
