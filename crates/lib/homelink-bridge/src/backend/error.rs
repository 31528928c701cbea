use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid backend request: {0}")]
    Request(#[from] http::Error),

    #[error("Backend request failed: {0}")]
    Client(#[from] hyper_util::client::legacy::Error),

    #[error("Failed to read the backend response body: {0}")]
    Body(#[from] hyper::Error),

    #[error("Backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("TLS error: {0}")]
    Rustls(#[from] rustls::Error),
}
