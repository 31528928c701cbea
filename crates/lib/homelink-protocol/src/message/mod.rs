use crate::error::ProtocolResult;
use crate::message::status::ErrorPayload;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub mod namespace;
pub mod status;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PayloadVersion {
    #[serde(rename = "2")]
    V2,
    #[serde(rename = "3")]
    V3,
}

impl PayloadVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadVersion::V2 => "2",
            PayloadVersion::V3 => "3",
        }
    }
}

/// Returns a fresh message identifier in the textual UUID-v4 form.
///
/// The value is opaque to both the platform and the backend, only its uniqueness matters.
pub fn message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub message_id: String,
    pub namespace: String,
    pub name: String,
    pub payload_version: PayloadVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

impl Header {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        payload_version: PayloadVersion,
    ) -> Self {
        Self {
            message_id: message_id(),
            namespace: namespace.into(),
            name: name.into(),
            payload_version,
            correlation_token: None,
        }
    }

    pub fn with_correlation_token(mut self, correlation_token: Option<String>) -> Self {
        self.correlation_token = correlation_token;
        self
    }
}

/// A v2 message: the inbound request shape and every v2 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub header: Header,
    #[serde(default)]
    pub payload: Value,
}

impl Directive {
    pub fn new(header: Header, payload: Value) -> Self {
        Self { header, payload }
    }

    pub fn discover_appliances(appliances: Vec<Value>) -> Self {
        let header = Header::new(
            namespace::DISCOVERY_V2,
            namespace::name::DISCOVER_APPLIANCES_RESPONSE,
            PayloadVersion::V2,
        );
        Self::new(header, json!({ "discoveredAppliances": appliances }))
    }

    pub fn expired_access_token() -> Self {
        Self::control_error(namespace::name::EXPIRED_ACCESS_TOKEN_ERROR, json!({}))
    }

    pub fn dependent_service_unavailable() -> Self {
        Self::control_error(
            namespace::name::DEPENDENT_SERVICE_UNAVAILABLE_ERROR,
            json!({}),
        )
    }

    /// Reports a request the bridge does not understand, naming the offending value.
    pub fn unexpected_information(faulting_parameter: &str) -> Self {
        Self::control_error(
            namespace::name::UNEXPECTED_INFORMATION_RECEIVED_ERROR,
            json!({ "faultingParameter": faulting_parameter }),
        )
    }

    fn control_error(name: &str, payload: Value) -> Self {
        Self::new(
            Header::new(namespace::CONTROL_V2, name, PayloadVersion::V2),
            payload,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Value>,
    #[serde(default)]
    pub payload: Value,
}

/// A v3 response: `{event: {header, endpoint?, payload}, context?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event: Event,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl EventEnvelope {
    pub fn new(header: Header, payload: Value) -> Self {
        Self {
            event: Event {
                header,
                endpoint: None,
                payload,
            },
            context: None,
        }
    }

    pub fn discover_response(endpoints: Vec<Value>, correlation_token: Option<String>) -> Self {
        let header = Header::new(
            namespace::DISCOVERY_V3,
            namespace::name::DISCOVER_RESPONSE,
            PayloadVersion::V3,
        )
        .with_correlation_token(correlation_token);
        Self::new(header, json!({ "endpoints": endpoints }))
    }

    /// Builds an `Alexa.ErrorResponse` event.
    ///
    /// The endpoint and correlation token are echoed from the directive that failed so the
    /// platform can match the error to the request.
    pub fn error(
        error: ErrorPayload,
        endpoint: Option<Value>,
        correlation_token: Option<String>,
    ) -> Self {
        let header = Header::new(
            namespace::CONTROL_V3,
            namespace::name::ERROR_RESPONSE,
            PayloadVersion::V3,
        )
        .with_correlation_token(correlation_token);

        Self {
            event: Event {
                header,
                endpoint,
                payload: error.into(),
            },
            context: None,
        }
    }
}

impl From<ErrorPayload> for Value {
    fn from(error: ErrorPayload) -> Self {
        json!({
            "type": error.error_type.as_str(),
            "message": error.message,
        })
    }
}

/// Everything a translator can hand back to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SkillResponse {
    Directive(Directive),
    Event(EventEnvelope),
    /// Fields copied verbatim from the backend; may be empty.
    Passthrough(Map<String, Value>),
}

impl SkillResponse {
    pub fn empty() -> Self {
        SkillResponse::Passthrough(Map::new())
    }

    pub fn to_value(&self) -> ProtocolResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<Directive> for SkillResponse {
    fn from(directive: Directive) -> Self {
        SkillResponse::Directive(directive)
    }
}

impl From<EventEnvelope> for SkillResponse {
    fn from(envelope: EventEnvelope) -> Self {
        SkillResponse::Event(envelope)
    }
}

#[cfg(test)]
mod tests;
