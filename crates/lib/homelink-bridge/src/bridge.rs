use crate::backend::error::TransportError;
use crate::backend::{BackendRequest, BackendResponse, Operation, SharedTransport};
use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use homelink_protocol::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// The directive router and translator.
///
/// Holds no per-request state, so one instance is shared by every in-flight request.
#[derive(Clone)]
pub struct SkillBridge {
    config: Arc<BridgeConfig>,
    transport: SharedTransport,
}

impl SkillBridge {
    pub fn new(config: BridgeConfig, transport: SharedTransport) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub(crate) fn backend_request(
        &self,
        operation: Operation,
        request: &InboundRequest,
    ) -> BridgeResult<BackendRequest> {
        let token = request.access_token()?;
        BackendRequest::build(operation, &self.config, token, request.forward_body())
    }

    /// Sends a single backend request, bounded by the configured timeout.
    pub(crate) async fn call(
        &self,
        request: BackendRequest,
    ) -> Result<BackendResponse, TransportError> {
        let timeout = self.config.backend.timeout;
        debug!(
            method = %request.method,
            host = %request.hostname,
            path = %request.path,
            "Sending backend request"
        );

        let response = match tokio::time::timeout(timeout, self.transport.send(request)).await {
            Ok(result) => result?,
            Err(_) => return Err(TransportError::Timeout(timeout)),
        };

        debug!(
            status = %response.status,
            body = %String::from_utf8_lossy(&response.body),
            "Backend response body"
        );

        Ok(response)
    }

    /// A v3 `ErrorResponse` addressed to the directive in `request`.
    pub(crate) fn error_event(
        request: &InboundRequest,
        error_type: ErrorType,
        message: impl Into<String>,
    ) -> SkillResponse {
        let message = message.into();
        warn!(error_type = error_type.as_str(), %message, "Answering with an error event");
        EventEnvelope::error(
            ErrorPayload::new(error_type, message),
            request.endpoint(),
            request.correlation_token(),
        )
        .into()
    }
}
