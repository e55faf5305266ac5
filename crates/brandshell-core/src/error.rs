//! Unified error handling for the brand shell core.

use thiserror::Error;

use crate::domain::ValidationError;

/// Root error type for brand shell operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrandShellError {
    /// Untrusted input failed validation (strict mode only — the lenient
    /// path normalizes silently instead).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A render adapter failed to produce output.
    #[error("rendering failed: {reason}")]
    Rendering { reason: String },

    /// A payload could not be encoded/decoded at the application boundary.
    #[error("payload error: {message}")]
    Payload { message: String },
}

/// Convenient result type alias.
pub type BrandShellResult<T> = Result<T, BrandShellError>;
