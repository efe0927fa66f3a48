//! # BenchKit
//!
//! Blast design for open-pit benches. Given the bench geometry and the
//! loading of each blasthole, BenchKit lays out a 2D cross-section with
//! holes, explosive columns and dimension lines, ready for any renderer.
//!
//! ## Architecture
//!
//! BenchKit is organized as a workspace with multiple crates:
//!
//! 1. **benchkit-core** - Shared point type, layout constants, errors
//! 2. **benchkit-designer** - Hole layout, bench geometry, annotations, scene
//! 3. **benchkit-settings** - Design file load, save and validation
//! 4. **benchkit** - Command line binary that integrates all crates

pub mod report;

pub use benchkit_core::{Error, LayoutIssue, ParameterError, Point, Result};
pub use benchkit_designer as designer;
pub use benchkit_designer::{
    AnnotationRequest, BlastDesign, BlastLayout, DimensionCategory, GeometryParams, HoleParams,
    Scene,
};
pub use benchkit_settings::{default_design_path, DesignFile, DisplaySettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays usable for scene JSON
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
