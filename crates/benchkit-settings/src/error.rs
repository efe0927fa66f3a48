//! Error types for the settings crate.
//!
//! Covers design file I/O, format handling and validation.

use benchkit_core::ParameterError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading or saving a design.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The design file could not be loaded.
    #[error("Failed to load design: {0}")]
    LoadError(String),

    /// The design file could not be saved.
    #[error("Failed to save design: {0}")]
    SaveError(String),

    /// A stored value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// A geometry parameter is outside its domain.
    #[error("Invalid geometry: {0}")]
    Parameter(#[from] ParameterError),

    /// The design could not be built from its stored parts.
    #[error("Design error: {0}")]
    Design(#[from] benchkit_core::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// A configuration error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the design file location and format.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file extension is not a supported format.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The file already exists and overwriting was not requested.
    #[error("Design file already exists: {0}")]
    AlreadyExists(String),

    /// Platform is not supported for config directory resolution.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
