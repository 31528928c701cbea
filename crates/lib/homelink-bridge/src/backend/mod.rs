use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::uri::Scheme;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode, Uri};
use http_body_util::Full;
use hyper::body::Bytes;
use serde::Deserialize;
use serde_json::Value;

pub mod error;
pub mod transport;

pub use transport::{BackendTransport, HttpsTransport, SharedTransport};

pub const BASE_PATH: &str = "/v1";

const TOKEN_HEADER: &str = "token";
const REGION_HEADER: &str = "alexaregion";

/// Backend result code signalling an expired or invalid end-user credential.
const RES_CODE_UNAUTHORIZED: i64 = 401;

/// One backend endpoint per translator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    DiscoveryV2,
    ControlV2,
    DiscoveryV3,
    AuthorizeV3,
    ControlV3,
}

impl Operation {
    pub fn path(&self) -> String {
        let suffix = match self {
            Operation::DiscoveryV2 => "/voice/alexa/home_skill/discovery",
            Operation::ControlV2 => "/voice/alexa/home_skill/control",
            Operation::DiscoveryV3 => "/voice/alexa/home_skill/v3/discovery",
            Operation::AuthorizeV3 => "/voice/alexa/home_skill/v3/authorize",
            Operation::ControlV3 => "/voice/alexa/home_skill/v3/control",
        };
        format!("{BASE_PATH}{suffix}")
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::DiscoveryV2 => Method::GET,
            _ => Method::POST,
        }
    }

    fn uses_auth_host(&self) -> bool {
        matches!(self, Operation::DiscoveryV3 | Operation::AuthorizeV3)
    }
}

/// Everything needed to issue a single backend call.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub operation: Operation,
    pub hostname: String,
    pub port: u16,
    pub path: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl BackendRequest {
    /// Builds the request for `operation`, carrying `token` and, for POST operations, `body`
    /// serialized as JSON.
    pub fn build(
        operation: Operation,
        config: &BridgeConfig,
        token: &str,
        body: &Value,
    ) -> BridgeResult<Self> {
        let hostname = if operation.uses_auth_host() {
            config.backend.auth_hostname.clone()
        } else {
            config.backend.hostname.clone()
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            HeaderName::from_static(TOKEN_HEADER),
            HeaderValue::from_str(token.trim()).map_err(http::Error::from)?,
        );
        if operation == Operation::AuthorizeV3 {
            headers.insert(
                HeaderName::from_static(REGION_HEADER),
                HeaderValue::from_str(&config.skill.region).map_err(http::Error::from)?,
            );
        }

        let method = operation.method();
        let body = if method == Method::POST {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            let encoded = serde_json::to_vec(body).map_err(BridgeError::Encoding)?;
            Some(Bytes::from(encoded))
        } else {
            None
        };

        Ok(Self {
            operation,
            hostname,
            port: config.backend.port,
            path: operation.path(),
            method,
            headers,
            body,
        })
    }

    pub fn uri(&self) -> Result<Uri, http::Error> {
        let authority = format!("{}:{}", self.hostname, self.port);
        Uri::builder()
            .scheme(Scheme::HTTPS)
            .authority(authority.as_str())
            .path_and_query(self.path.as_str())
            .build()
    }

    pub fn into_http(self) -> Result<Request<Full<Bytes>>, http::Error> {
        let mut builder = Request::builder().method(self.method.clone()).uri(self.uri()?);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        builder.body(Full::new(self.body.unwrap_or_default()))
    }
}

/// The raw backend answer, body fully buffered.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl BackendResponse {
    pub fn reply(&self) -> BridgeResult<BackendReply> {
        serde_json::from_slice(&self.body).map_err(BridgeError::MalformedReply)
    }
}

/// The fields of a backend body the translators look at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendReply {
    #[serde(default)]
    pub res_code: Option<Value>,
    #[serde(default)]
    pub header: Option<Value>,
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub event: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

impl BackendReply {
    pub fn credential_rejected(&self) -> bool {
        self.res_code.as_ref().and_then(Value::as_i64) == Some(RES_CODE_UNAUTHORIZED)
    }

    /// `payload.discoveredAppliances`, empty when absent.
    pub fn discovered_appliances(&self) -> Vec<Value> {
        array_at(self.payload.as_ref(), "/discoveredAppliances")
    }

    /// `event.payload.endpoints`, empty when absent.
    pub fn endpoints(&self) -> Vec<Value> {
        array_at(self.event.as_ref(), "/payload/endpoints")
    }
}

fn array_at(value: Option<&Value>, pointer: &str) -> Vec<Value> {
    value
        .and_then(|value| value.pointer(pointer))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
