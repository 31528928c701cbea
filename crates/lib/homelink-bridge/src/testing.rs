use crate::SkillBridge;
use crate::backend::error::TransportError;
use crate::backend::{BackendRequest, BackendResponse, BackendTransport};
use crate::config::{BackendConfig, BridgeConfig, SkillConfig};
use async_trait::async_trait;
use http::StatusCode;
use hyper::body::Bytes;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) fn test_config() -> BridgeConfig {
    BridgeConfig {
        backend: BackendConfig {
            hostname: "home.example.com".to_string(),
            auth_hostname: "auth.example.com".to_string(),
            port: 8443,
            timeout: Duration::from_millis(500),
        },
        skill: SkillConfig {
            region: "EU".to_string(),
        },
    }
}

enum Script {
    Respond(StatusCode, Bytes),
    Refuse,
    Stall,
}

/// Answers every request the same way and records what it was sent.
pub(crate) struct ScriptedTransport {
    script: Script,
    seen: Mutex<Vec<BackendRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn json(status: StatusCode, body: Value) -> Arc<Self> {
        Self::raw(status, body.to_string())
    }

    pub(crate) fn raw(status: StatusCode, body: impl Into<Bytes>) -> Arc<Self> {
        Self::with_script(Script::Respond(status, body.into()))
    }

    /// Fails every request as an unreachable backend would.
    pub(crate) fn refusing() -> Arc<Self> {
        Self::with_script(Script::Refuse)
    }

    /// Never answers; only the bridge timeout ends the call.
    pub(crate) fn stalling() -> Arc<Self> {
        Self::with_script(Script::Stall)
    }

    fn with_script(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<BackendRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> BackendRequest {
        self.requests().pop().expect("no backend request was sent")
    }
}

#[async_trait]
impl BackendTransport for ScriptedTransport {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Respond(status, body) => Ok(BackendResponse {
                status: *status,
                body: body.clone(),
            }),
            Script::Refuse => Err(TransportError::StdIo(std::io::Error::from(
                std::io::ErrorKind::ConnectionRefused,
            ))),
            Script::Stall => std::future::pending().await,
        }
    }
}

pub(crate) fn bridge_with(transport: Arc<ScriptedTransport>) -> SkillBridge {
    SkillBridge::new(test_config(), transport)
}
