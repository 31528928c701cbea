use crate::error::{ProtocolError, ProtocolResult};
use crate::message::PayloadVersion;
use crate::message::namespace;
use serde_json::Value;

const VERSION_V3: &str = "3";

/// Where an inbound request is sent.
///
/// v3 requests never fail routing: every namespace other than discovery and authorization
/// belongs to a device controller and is handled as a control directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    DiscoveryV3,
    AuthorizationV3,
    ControlV3,
    DiscoveryV2,
    ControlV2,
    UnsupportedV2 { namespace: String },
}

impl Route {
    pub fn resolve(request: &Value) -> ProtocolResult<Self> {
        let version = payload_version(request).ok_or(ProtocolError::UnknownVersion)?;

        if version == VERSION_V3 {
            let requested = str_at(request, "/directive/header/namespace").unwrap_or_default();
            let route = match requested {
                namespace::DISCOVERY_V3 => Route::DiscoveryV3,
                namespace::AUTHORIZATION_V3 => Route::AuthorizationV3,
                _ => Route::ControlV3,
            };
            return Ok(route);
        }

        // Anything that is not "3" goes down the legacy path, keyed on the top level header.
        // A header without a usable namespace is answered as unsupported.
        let header = request
            .get("header")
            .filter(|header| header.is_object())
            .ok_or(ProtocolError::MissingField("header"))?;
        let requested = header
            .get("namespace")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let route = match requested {
            namespace::DISCOVERY_V2 => Route::DiscoveryV2,
            namespace::CONTROL_V2 => Route::ControlV2,
            other => Route::UnsupportedV2 {
                namespace: other.to_string(),
            },
        };

        Ok(route)
    }

    pub fn payload_version(&self) -> PayloadVersion {
        match self {
            Route::DiscoveryV3 | Route::AuthorizationV3 | Route::ControlV3 => PayloadVersion::V3,
            Route::DiscoveryV2 | Route::ControlV2 | Route::UnsupportedV2 { .. } => {
                PayloadVersion::V2
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::DiscoveryV3 => "discovery_v3",
            Route::AuthorizationV3 => "authorization_v3",
            Route::ControlV3 => "control_v3",
            Route::DiscoveryV2 => "discovery_v2",
            Route::ControlV2 => "control_v2",
            Route::UnsupportedV2 { .. } => "unsupported_v2",
        }
    }

    /// JSON pointer to the end-user token, with the field name used in error reports.
    fn token_location(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Route::DiscoveryV3 => Some((
                "/directive/payload/scope/token",
                "directive.payload.scope.token",
            )),
            Route::AuthorizationV3 => Some((
                "/directive/payload/grantee/token",
                "directive.payload.grantee.token",
            )),
            Route::ControlV3 => Some((
                "/directive/endpoint/scope/token",
                "directive.endpoint.scope.token",
            )),
            Route::DiscoveryV2 | Route::ControlV2 => {
                Some(("/payload/accessToken", "payload.accessToken"))
            }
            Route::UnsupportedV2 { .. } => None,
        }
    }
}

/// Reads the payload version from `directive.header` first, then from the top level `header`.
///
/// Empty strings count as absent.
pub fn payload_version(request: &Value) -> Option<&str> {
    str_at(request, "/directive/header/payloadVersion")
        .filter(|version| !version.is_empty())
        .or_else(|| str_at(request, "/header/payloadVersion"))
        .filter(|version| !version.is_empty())
}

fn str_at<'a>(request: &'a Value, pointer: &str) -> Option<&'a str> {
    request.pointer(pointer).and_then(Value::as_str)
}

/// A raw inbound request together with its resolved route.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    raw: Value,
    route: Route,
}

impl InboundRequest {
    pub fn parse(raw: Value) -> ProtocolResult<Self> {
        let route = Route::resolve(&raw)?;
        Ok(Self { raw, route })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The end-user access token, trimmed of surrounding whitespace.
    pub fn access_token(&self) -> ProtocolResult<&str> {
        let (pointer, field) = self
            .route
            .token_location()
            .ok_or(ProtocolError::MissingField("token"))?;

        match str_at(&self.raw, pointer).map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ProtocolError::MissingField(field)),
        }
    }

    pub fn correlation_token(&self) -> Option<String> {
        str_at(&self.raw, "/directive/header/correlationToken").map(str::to_string)
    }

    pub fn endpoint(&self) -> Option<Value> {
        self.raw.pointer("/directive/endpoint").cloned()
    }

    /// The JSON forwarded to the backend: the `directive` object for v3, the whole request
    /// for v2.
    pub fn forward_body(&self) -> &Value {
        match self.route.payload_version() {
            PayloadVersion::V3 => self.raw.get("directive").unwrap_or(&self.raw),
            PayloadVersion::V2 => &self.raw,
        }
    }
}
