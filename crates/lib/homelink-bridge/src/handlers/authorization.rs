use super::{EXPIRED_CREDENTIAL_MESSAGE, unreachable_message};
use crate::SkillBridge;
use crate::backend::Operation;
use crate::error::BridgeResult;
use homelink_protocol::prelude::*;
use serde_json::Map;
use tracing::{error, info};

impl SkillBridge {
    /// Exchanges the grant code for backend credentials (account linking).
    ///
    /// The backend already answers with a complete `AcceptGrant.Response` event, so it is
    /// handed back untouched.
    #[tracing::instrument(skip_all, fields(route = "authorization_v3"))]
    pub(crate) async fn authorize_v3(
        &self,
        request: &InboundRequest,
    ) -> BridgeResult<SkillResponse> {
        let backend_request = self.backend_request(Operation::AuthorizeV3, request)?;

        let response = match self.call(backend_request).await {
            Ok(response) => response,
            Err(error) => {
                error!(%error, "Authorization request failed");
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

        let mut fields = Map::new();
        if let Some(event) = reply.event {
            fields.insert("event".to_string(), event);
        }
        info!(has_event = !fields.is_empty(), "Authorization completed");

        Ok(SkillResponse::Passthrough(fields))
    }
}
