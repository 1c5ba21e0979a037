//! Error types for the decode service and its client.

use thiserror::Error;

/// Result type alias for service and socket operations.
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors raised around the cipher core. The core itself never fails.
#[derive(Error, Debug)]
pub enum DecoderError {
    /// Text was empty or whitespace only
    #[error("Please enter some text to decode.")]
    EmptyInput,

    /// Known-shift value outside 1..=25
    #[error("Shift must be between 1 and 25, got {0}")]
    ShiftOutOfRange(i32),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket transport error
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Server closed or answered with something other than a response
    #[error("Unexpected reply from server: {0}")]
    UnexpectedReply(String),
}
