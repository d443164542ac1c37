//! Error types for the cut tools crate.

use boxkit_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while computing cut geometry.
///
/// Failures are immediate and local: a bad configuration for one panel never
/// prevents computing another.
#[derive(Error, Debug)]
pub enum CutToolError {
    /// A configuration invariant was violated; surfaced before any path
    /// computation begins.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Geometry was requested that the configuration does not define, e.g.
    /// a fold point when no fold height is configured.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The inputs admit no realizable geometry, e.g. a model dash longer
    /// than the segment it should tile.
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// JSON serialization/deserialization of a configuration failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for cut tool operations.
pub type CutToolResult<T> = Result<T, CutToolError>;
