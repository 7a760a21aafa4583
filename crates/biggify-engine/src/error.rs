//! Error types for the strip transforms.

use image::ImageError;

/// A parameter or input list was rejected before any image work started.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Rows must be a positive integer, got {0}")]
    InvalidRows(i64),

    #[error("Stretch factor must be between 1.0 and 3.0, got {0}")]
    StretchFactorOutOfRange(f64),

    #[error("Output scale factor must be between 0.5 and 4.0, got {0}")]
    OutputScaleOutOfRange(f64),

    #[error("No images provided for merging")]
    NoImages,
}

/// Errors that can occur while decoding, transforming or encoding.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Decode error: {0}")]
    Decode(#[source] ImageError),

    #[error("Transform error: {0}")]
    Transform(String),

    #[error("Encode error: {0}")]
    Encode(#[source] ImageError),
}

impl EngineError {
    /// Whether the error was raised by parameter validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
