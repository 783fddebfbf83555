//! Error types for the raising kids simulator

use thiserror::Error;

/// Main error type for the simulator
#[derive(Error, Debug)]
pub enum RaiseKidsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input closed before the game could continue")]
    InputClosed,

    #[error("Invalid event catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the simulator
pub type Result<T> = std::result::Result<T, RaiseKidsError>;
