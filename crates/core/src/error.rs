//! Error types for the brainstream engine core.

use thiserror::Error;

/// Errors produced by engine construction and surface operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when creating an engine or pixmap.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A configuration value was outside its usable range.
    #[error("invalid config for '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An i/o failure while writing a rendered surface.
    #[error("i/o error: {0}")]
    Io(String),
}
