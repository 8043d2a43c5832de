//! Error types for the markup appearance library.
//!
//! Missing annotation data (no rectangle, no quad points, no color) is not an
//! error: generation simply produces nothing. The variants here cover the
//! faults that can actually occur while reading annotation dictionaries or
//! writing content streams.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building annotation appearances.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while writing a content stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },

    /// Annotation dictionary is structurally invalid
    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    /// A scoped stream was closed a second time
    #[error("Stream already closed")]
    StreamClosed,
}
