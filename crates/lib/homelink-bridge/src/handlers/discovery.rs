use super::{EXPIRED_CREDENTIAL_MESSAGE, unreachable_message};
use crate::SkillBridge;
use crate::backend::Operation;
use crate::error::BridgeResult;
use homelink_protocol::prelude::*;
use tracing::{error, info, warn};

impl SkillBridge {
    /// Asks the backend for the user's appliances and answers with a
    /// `DiscoverAppliancesResponse`.
    #[tracing::instrument(skip_all, fields(route = "discovery_v2"))]
    pub(crate) async fn discover_v2(
        &self,
        request: &InboundRequest,
    ) -> BridgeResult<SkillResponse> {
        let backend_request = self.backend_request(Operation::DiscoveryV2, request)?;

        let response = match self.call(backend_request).await {
            Ok(response) => response,
            Err(error) => {
                error!(%error, "Discovery request failed");
                return Ok(Directive::dependent_service_unavailable().into());
            }
        };

        let reply = response.reply()?;
        if reply.credential_rejected() {
            warn!("Backend rejected the access token");
            return Ok(Directive::expired_access_token().into());
        }

        let appliances = reply.discovered_appliances();
        info!(count = appliances.len(), "Discovered appliances");

        Ok(Directive::discover_appliances(appliances).into())
    }

    /// Asks the backend for the user's endpoints and answers with a `Discover.Response` event.
    #[tracing::instrument(skip_all, fields(route = "discovery_v3"))]
    pub(crate) async fn discover_v3(
        &self,
        request: &InboundRequest,
    ) -> BridgeResult<SkillResponse> {
        let backend_request = self.backend_request(Operation::DiscoveryV3, request)?;

        let response = match self.call(backend_request).await {
            Ok(response) => response,
            Err(error) => {
                error!(%error, "Discovery request failed");
                return Ok(Self::error_event(
                    request,
                    ErrorType::InternalError,
                    unreachable_message(&error),
                ));
            }
        };

        let reply = response.reply()?;
        if reply.credential_rejected() {
            return Ok(Self::error_event(
                request,
                ErrorType::InvalidAuthorizationCredential,
                EXPIRED_CREDENTIAL_MESSAGE,
            ));
        }

        let endpoints = reply.endpoints();
        info!(count = endpoints.len(), "Discovered endpoints");

        Ok(EventEnvelope::discover_response(endpoints, request.correlation_token()).into())
    }
}
