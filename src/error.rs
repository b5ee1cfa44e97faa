use std::path::PathBuf;
use thiserror::Error;

/// A drawing configuration that cannot produce geometry.
///
/// These never escape the renderer as faults: they are drawn on the canvas
/// as an inline message instead of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Point count must be at least 1 (got {0})")]
    TooFewPoints(i32),

    #[error("Corner mode needs at least 2 points (got {0})")]
    TooFewCornerPoints(i32),

    #[error("Point count must be at most {} (got {0})", crate::config::MAX_POINT_COUNT)]
    TooManyPoints(i32),
}

/// Errors that can occur while decoding a background image
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to read image file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Dropped file has no accessible data: {0}")]
    NoData(String),
}

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Canvas surface is empty")]
    EmptySurface,

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Errors that can occur while loading the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The bundled font used for inline messages could not be parsed
#[derive(Debug, Error)]
#[error("Failed to load font: {0}")]
pub struct FontLoadError(pub String);

/// Errors reported by an ad host when a slot cannot be filled
#[derive(Debug, Error)]
pub enum AdError {
    #[error("Ad network not loaded")]
    NotLoaded,

    #[error("Ad slot {slot} rejected: {reason}")]
    Rejected { slot: String, reason: String },
}

/// Errors that can occur while parsing a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Color must have 6 hex digits: {0:?}")]
    BadLength(String),

    #[error("Invalid hex digit in color: {0:?}")]
    BadDigit(String),
}
