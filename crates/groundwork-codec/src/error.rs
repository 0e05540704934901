//! Error types for codec operations

use thiserror::Error;

/// Errors from envelope and DTO handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The envelope was produced under a protocol version this build does
    /// not understand.
    #[error("unsupported envelope version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the envelope header.
        found: u16,
        /// Version this build supports.
        supported: u16,
    },

    /// A DTO row's path does not connect to the tree built from the rows
    /// before it.
    #[error("row {index} ({path}) does not connect to the preceding rows")]
    DisconnectedRow {
        /// Zero-based row index.
        index: usize,
        /// Display form of the offending path.
        path: String,
    },

    /// The first DTO row must be the root: a single-segment path.
    #[error("first row must hold a single-segment root path, got {path}")]
    BadRootRow {
        /// Display form of the offending path.
        path: String,
    },
}
