use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Setting must not be blank: {0}")]
    MissingSetting(&'static str),

    #[error("Backend timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Failed to set up the backend transport: {0}")]
    Transport(#[from] homelink_bridge::backend::error::TransportError),

    #[error("Server error: {0}")]
    Server(#[from] homelink_bridge::server::error::ServerError),
}
