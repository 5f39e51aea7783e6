//! Error types for the prize wheel engine

use thiserror::Error;

use crate::sector::{MAX_SECTORS, MIN_SECTORS};

/// Prize wheel errors
#[derive(Debug, Error)]
pub enum WheelError {
    /// Empty or malformed input handed to a core function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lower bound above upper bound
    #[error("Invalid range: min {min} > max {max}")]
    InvalidRange { min: u32, max: u32 },

    /// Sector list length outside the supported range
    #[error("Sector count must be between {} and {}, got {count}", MIN_SECTORS, MAX_SECTORS)]
    SectorCount { count: usize },

    /// Two sectors share an id
    #[error("Duplicate sector id: {0}")]
    DuplicateSectorId(String),

    /// Configuration value out of bounds
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wheel operations
pub type WheelResult<T> = Result<T, WheelError>;
