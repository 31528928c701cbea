use homelink_protocol::error::ProtocolError;
use thiserror::Error;

/// Failures that stop a directive from being translated at all.
///
/// Backend rejections and transport failures are not errors at this level: they are mapped to
/// error responses for the voice assistant.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Failed to build the backend request: {0}")]
    Request(#[from] http::Error),

    #[error("Malformed backend response: {0}")]
    MalformedReply(serde_json::Error),

    #[error("Failed to encode the backend request body: {0}")]
    Encoding(serde_json::Error),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
