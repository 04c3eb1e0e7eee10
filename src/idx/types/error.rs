//! Custom error types for the idx-reader crate.

use thiserror::Error;

use super::models::ElementType;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum IdxError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The byte source ended before the full header could be read.
    #[error("Truncated header: stream ended while reading {context} ({needed} bytes needed)")]
    TruncatedHeader {
        context: &'static str,
        needed: usize,
    },

    /// The header is structurally invalid (zero rank byte, negative sizes, overflow).
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The type tag byte does not name one of the supported element types.
    #[error("Unsupported element type tag: {0:#04x}")]
    UnsupportedType(u8),

    /// The caller asked for a different element type than the file declares.
    #[error("Type mismatch: requested {expected}, but file contains {found}")]
    TypeMismatch {
        expected: ElementType,
        found: ElementType,
    },

    /// The caller asked for a different element rank than the file declares.
    #[error("Shape mismatch: {reason} (requested rank {expected}, file rank {found})")]
    ShapeMismatch {
        reason: &'static str,
        expected: String,
        found: usize,
    },

    /// The data section ended before all declared elements were decoded.
    #[error("Truncated data: stream ended while decoding element {index} of {expected}")]
    TruncatedData { index: usize, expected: usize },
}

/// A convenience `Result` type alias using the crate's `IdxError` type.
pub type Result<T> = std::result::Result<T, IdxError>;
