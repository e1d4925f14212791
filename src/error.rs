//! Itemfeed error types

/// Itemfeed error types
#[derive(Debug, thiserror::Error)]
pub enum ItemfeedError {
    // Transport errors — connection refused, reset, broken channel.
    #[error("transport error: {0}")]
    Transport(String),

    // Streaming errors — a stream broke after it was established.
    #[error("stream error: {0}")]
    Stream(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("operation not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ItemfeedError {
    /// Whether the failure is transport-shaped and may succeed on a retry.
    ///
    /// The crate itself never retries; callers that choose to can use this
    /// to separate retryable faults from contract errors.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ItemfeedError::Transport(_) | ItemfeedError::Stream(_) | ItemfeedError::Timeout
        )
    }
}

/// Result type alias for itemfeed operations
pub type Result<T> = std::result::Result<T, ItemfeedError>;
