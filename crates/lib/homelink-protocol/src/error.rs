use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unable to determine the payload version of the request")]
    UnknownVersion,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
