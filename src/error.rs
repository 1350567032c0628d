//! Error types and handling for lazy streams
//!
//! Every fallible stream operation returns [`StreamResult`]. The errors are
//! contract violations by the caller (reading past the end of a stream,
//! forcing an unbound self-reference); none of them are retryable.

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// `head()` or `tail()` was requested on an empty stream
    #[error("cannot get the {operation} of an empty stream")]
    EmptyAccess { operation: &'static str },
    /// `at(index)` walked past the end of a finite stream
    #[error("stream index {index} out of range (stream has {len} elements)")]
    IndexOutOfRange { index: usize, len: usize },
    /// `reduce` has no first element to seed the fold with
    #[error("cannot reduce an empty stream")]
    EmptyReduce,
    /// `cycle` needs at least one element to repeat
    #[error("cycle pattern must contain at least one element")]
    EmptyPattern,
    /// A deferred stream was forced before being bound
    #[error("deferred stream forced before it was bound")]
    Unbound,
    /// A deferred stream can only be bound once
    #[error("deferred stream is already bound")]
    AlreadyBound,
    /// Configuration failed to parse or validate
    #[error("invalid stream configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::InvalidConfig(err.to_string())
    }
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
