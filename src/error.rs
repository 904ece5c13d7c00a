// error.rs
// Error types for field evaluation and scenario loading

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Grid shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },

    #[error("Grid extent mismatch: expected bounds {expected:?}, got {actual:?}")]
    GridMismatch {
        expected: [f64; 3],
        actual: [f64; 3],
    },

    #[error("Invalid grid resolution: {resolution} (must be at least 1)")]
    InvalidResolution { resolution: usize },

    #[error("Invalid grid bounds: {bounds} (must be positive and finite)")]
    InvalidBounds { bounds: f64 },

    #[error("Superposition needs at least one field contribution")]
    NoContributions,
}

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read or write scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scenario: {message}")]
    Invalid { message: String },

    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
