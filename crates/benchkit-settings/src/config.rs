//! Design file handling for BenchKit
//!
//! A [`DesignFile`] is the persisted form of a [`BlastDesign`]. It is stored
//! as JSON or TOML, chosen by file extension, by default under the platform
//! config directory.
//!
//! The file is organized into three sections:
//! - `geometry`: the global bench parameters
//! - `holes`: per-hole loading, one entry per generated hole
//! - `display`: which dimensions are drawn and on which holes

use benchkit_designer::{
    AnnotationRequest, BlastDesign, DimensionCategory, GeometryParams, HoleParams,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// File name of the default design.
pub const DEFAULT_DESIGN_FILE: &str = "design.toml";

/// Ranges offered by the interactive editor. Values outside them are
/// accepted but logged.
const GEOMETRY_RANGES: [(&str, RangeInclusive<f64>); 8] = [
    ("bench_height", 2.0..=30.0),
    ("slope_angle_deg", 30.0..=85.0),
    ("base_offset", 0.0..=15.0),
    ("influence_length", 5.0..=150.0),
    ("burden", 0.5..=15.0),
    ("crest_adjust", 0.0..=10.0),
    ("study_base_length", 10.0..=200.0),
    ("hole_thickness", 0.05..=2.0),
];

const HOLE_LENGTH_RANGE: RangeInclusive<f64> = 1.0..=50.0;

/// Dimension display choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Master switch for all dimension lines
    pub show_dimensions: bool,
    pub categories: BTreeSet<DimensionCategory>,
    /// Hole numbers as shown on the diagram (1-based)
    pub selected_holes: BTreeSet<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::from_request(&AnnotationRequest::default())
    }
}

impl DisplaySettings {
    pub fn from_request(request: &AnnotationRequest) -> Self {
        Self {
            show_dimensions: request.enabled,
            categories: request.categories.clone(),
            selected_holes: request.selected_holes.iter().map(|i| i + 1).collect(),
        }
    }

    /// Converts to an annotation request with 0-based hole indices.
    pub fn to_request(&self) -> AnnotationRequest {
        AnnotationRequest {
            enabled: self.show_dimensions,
            categories: self.categories.clone(),
            selected_holes: self
                .selected_holes
                .iter()
                .filter_map(|n| n.checked_sub(1))
                .collect(),
        }
    }
}

/// Persisted blast design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignFile {
    pub geometry: GeometryParams,
    /// Missing means "not stored"; the editor sizes it from the geometry
    #[serde(default)]
    pub holes: Vec<HoleParams>,
    pub display: DisplaySettings,
}

impl Default for DesignFile {
    fn default() -> Self {
        Self::from_design(&BlastDesign::default())
    }
}

impl DesignFile {
    /// Create new design file with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of an in-memory design.
    pub fn from_design(design: &BlastDesign) -> Self {
        Self {
            geometry: *design.params(),
            holes: design.holes().as_slice().to_vec(),
            display: DisplaySettings::from_request(design.request()),
        }
    }

    /// Builds the editable design.
    ///
    /// A missing hole list, or one whose length differs from the derived hole
    /// count, is replaced by defaults, as any resize would do in the editor.
    pub fn to_design(&self) -> SettingsResult<BlastDesign> {
        let design = BlastDesign::try_from_parts(
            self.geometry,
            self.holes.clone(),
            self.display.to_request(),
        )?;
        if !self.holes.is_empty() && design.hole_count() != self.holes.len() {
            warn!(
                "Design stores {} holes but the geometry yields {}; hole loading reset",
                self.holes.len(),
                design.hole_count()
            );
        }
        Ok(design)
    }

    /// Load design from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let design: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        design.validate()?;
        debug!("Loaded design from {}", path.display());
        Ok(design)
    }

    /// Save design to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Saved design to {}", path.display());
        Ok(())
    }

    /// Validate design
    ///
    /// Geometry must satisfy its domain and hole numbers must be 1-based.
    /// Values outside the editor ranges only produce warnings.
    pub fn validate(&self) -> SettingsResult<()> {
        self.geometry.validate()?;

        for (i, hole) in self.holes.iter().enumerate() {
            let fields = [
                ("length", hole.length),
                ("charge_length", hole.charge_length),
                ("water_length", hole.water_length),
            ];
            for (field, value) in fields {
                if !value.is_finite() || value < 0.0 {
                    return Err(SettingsError::InvalidSetting {
                        key: format!("holes[{}].{}", i, field),
                        reason: format!("must be a finite value >= 0, got {}", value),
                    });
                }
            }
        }

        if self.display.selected_holes.contains(&0) {
            return Err(SettingsError::InvalidSetting {
                key: "display.selected_holes".to_string(),
                reason: "hole numbers start at 1".to_string(),
            });
        }

        for warning in self.range_warnings() {
            warn!("{}", warning);
        }
        Ok(())
    }

    /// Values that are valid but outside the editor ranges.
    pub fn range_warnings(&self) -> Vec<String> {
        let g = &self.geometry;
        let values = [
            g.bench_height,
            g.slope_angle_deg,
            g.base_offset,
            g.influence_length,
            g.burden,
            g.crest_adjust,
            g.study_base_length,
            g.hole_thickness,
        ];

        let mut warnings: Vec<String> = GEOMETRY_RANGES
            .iter()
            .zip(values)
            .filter(|((_, range), value)| !range.contains(value))
            .map(|((name, range), value)| {
                format!(
                    "geometry.{} = {} is outside {}..={}",
                    name,
                    value,
                    range.start(),
                    range.end()
                )
            })
            .collect();

        for (i, hole) in self.holes.iter().enumerate() {
            if !HOLE_LENGTH_RANGE.contains(&hole.length) {
                warnings.push(format!(
                    "holes[{}].length = {} is outside {}..={}",
                    i,
                    hole.length,
                    HOLE_LENGTH_RANGE.start(),
                    HOLE_LENGTH_RANGE.end()
                ));
            }
            if !hole.is_within_range() {
                warnings.push(format!(
                    "holes[{}] charge or water exceeds the hole length and will be clamped",
                    i
                ));
            }
        }
        warnings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Get the platform-specific config directory for BenchKit
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("benchkit"))
        .ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })
}

/// Default location of the design file.
pub fn default_design_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(DEFAULT_DESIGN_FILE))
}
