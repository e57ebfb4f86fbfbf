//! Error types shared by the formulas, the evaluator and the plot renderer.

use thiserror::Error;

/// Main error type for elastic-wave operations
#[derive(Debug, Error)]
pub enum WaveError {
    /// None of the alternative inputs was supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// A formula divided by zero
    #[error("Domain error: {0}")]
    Domain(String),

    /// Output directory or file could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An output format name that no backend writes
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The charting backend failed while drawing
    #[error("Plot error: {0}")]
    Plot(String),

    /// No interactive display surface
    #[error("Display error: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, WaveError>;
