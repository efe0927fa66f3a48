//! BenchKit Settings Crate
//!
//! Loads, saves and validates blast design files. A design file stores the
//! bench geometry, the per-hole loading and the dimension display choices.

pub mod config;
pub mod error;

pub use config::{default_design_path, DesignFile, DisplaySettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
