use super::{EXPIRED_CREDENTIAL_MESSAGE, unreachable_message};
use crate::SkillBridge;
use crate::backend::Operation;
use crate::error::BridgeResult;
use homelink_protocol::prelude::*;
use http::StatusCode;
use serde_json::Map;
use tracing::{error, info, warn};

impl SkillBridge {
    /// Forwards a v2 device action.
    ///
    /// Anything short of a 200 carrying a `header` falls back to
    /// `DependentServiceUnavailableError`.
    #[tracing::instrument(skip_all, fields(route = "control_v2"))]
    pub(crate) async fn control_v2(
        &self,
        request: &InboundRequest,
    ) -> BridgeResult<SkillResponse> {
        let backend_request = self.backend_request(Operation::ControlV2, request)?;

        let response = match self.call(backend_request).await {
            Ok(response) => response,
            Err(error) => {
                error!(%error, "Control request failed");
                return Ok(Directive::dependent_service_unavailable().into());
            }
        };

        if response.status != StatusCode::OK {
            warn!(status = %response.status, "Backend did not accept the control directive");
            return Ok(Directive::dependent_service_unavailable().into());
        }

        let reply = response.reply()?;
        if reply.credential_rejected() {
            warn!("Backend rejected the access token");
            return Ok(Directive::expired_access_token().into());
        }

        let Some(header) = reply.header else {
            warn!("Backend reply carried no header");
            return Ok(Directive::dependent_service_unavailable().into());
        };

        let mut fields = Map::new();
        fields.insert("header".to_string(), header);
        if let Some(payload) = reply.payload {
            fields.insert("payload".to_string(), payload);
        }
        info!("Control directive confirmed");

        Ok(SkillResponse::Passthrough(fields))
    }

    /// Forwards a v3 directive for any controller namespace.
    ///
    /// A confirmed action is the backend's `context` and `event`, copied verbatim. Any other
    /// outcome short of an error answers with an empty object.
    #[tracing::instrument(skip_all, fields(route = "control_v3"))]
    pub(crate) async fn control_v3(
        &self,
        request: &InboundRequest,
    ) -> BridgeResult<SkillResponse> {
        let backend_request = self.backend_request(Operation::ControlV3, request)?;

        let response = match self.call(backend_request).await {
            Ok(response) => response,
            Err(error) => {
                error!(%error, "Control request failed");
                return Ok(Self::error_event(
                    request,
                    ErrorType::InternalError,
                    unreachable_message(&error),
                ));
            }
        };

        // res_code 401 takes precedence over the HTTP status.
        let reply = response.reply();
        if reply
            .as_ref()
            .is_ok_and(|reply| reply.credential_rejected())
        {
            return Ok(Self::error_event(
                request,
                ErrorType::InvalidAuthorizationCredential,
                EXPIRED_CREDENTIAL_MESSAGE,
            ));
        }

        if response.status != StatusCode::OK {
            warn!(status = %response.status, "Backend did not accept the control directive");
            return Ok(SkillResponse::empty());
        }

        let reply = reply?;

        let Some(context) = reply.context else {
            warn!("Backend reply carried no context");
            return Ok(SkillResponse::empty());
        };

        let mut fields = Map::new();
        fields.insert("context".to_string(), context);
        if let Some(event) = reply.event {
            fields.insert("event".to_string(), event);
        }
        info!("Control directive confirmed");

        Ok(SkillResponse::Passthrough(fields))
    }
}
