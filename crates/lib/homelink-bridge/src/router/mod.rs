use crate::SkillBridge;
use crate::error::BridgeResult;
use homelink_protocol::prelude::*;
use serde_json::Value;
use tracing::{debug, error, info};

impl SkillBridge {
    /// Handles one inbound request end to end.
    ///
    /// Returns `None` when the request could not be translated; the failure is logged here and
    /// no response envelope is produced for it.
    #[tracing::instrument(skip_all)]
    pub async fn dispatch(&self, request: Value) -> Option<SkillResponse> {
        match self.try_dispatch(request).await {
            Ok(response) => Some(response),
            Err(error) => {
                error!(%error, "Failed to handle the smart home request");
                None
            }
        }
    }

    pub async fn try_dispatch(&self, request: Value) -> BridgeResult<SkillResponse> {
        debug!(request = %pretty(&request), "Received smart home request");

        let request = InboundRequest::parse(request)?;
        let route = request.route();
        info!(
            route = route.name(),
            payload_version = route.payload_version().as_str(),
            "Dispatching directive"
        );

        let response = match route {
            Route::DiscoveryV3 => self.discover_v3(&request).await?,
            Route::AuthorizationV3 => self.authorize_v3(&request).await?,
            Route::ControlV3 => self.control_v3(&request).await?,
            Route::DiscoveryV2 => self.discover_v2(&request).await?,
            Route::ControlV2 => self.control_v2(&request).await?,
            Route::UnsupportedV2 { namespace } => {
                error!(%namespace, "No supported namespace");
                Directive::unexpected_information(namespace).into()
            }
        };

        if let Ok(value) = response.to_value() {
            debug!(response = %pretty(&value), "Answering smart home request");
        }

        Ok(response)
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests;
