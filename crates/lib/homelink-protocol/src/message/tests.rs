use super::*;
use crate::message::status::ErrorType;
use std::collections::HashSet;

#[test]
fn test_message_ids_are_unique() {
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        let header = Header::new(namespace::DISCOVERY_V3, "Discover", PayloadVersion::V3);
        assert!(seen.insert(header.message_id), "message id was generated twice");
    }
}

#[test]
fn test_message_id_is_uuid_v4_shaped() {
    let id = message_id();
    let parsed = uuid::Uuid::parse_str(&id).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
    assert_eq!(id.len(), 36);
}

#[test]
fn test_header_serializes_camel_case() {
    let header = Header::new(namespace::CONTROL_V3, "Response", PayloadVersion::V3)
        .with_correlation_token(Some("corr-1".to_string()));

    let value = serde_json::to_value(&header).unwrap();
    assert_eq!(value["namespace"], "Alexa");
    assert_eq!(value["name"], "Response");
    assert_eq!(value["payloadVersion"], "3");
    assert_eq!(value["correlationToken"], "corr-1");
    assert!(value["messageId"].is_string());
}

#[test]
fn test_header_omits_missing_correlation_token() {
    let header = Header::new(namespace::DISCOVERY_V2, "Discover", PayloadVersion::V2);
    let value = serde_json::to_value(&header).unwrap();
    assert!(value.get("correlationToken").is_none());
    assert_eq!(value["payloadVersion"], "2");
}

#[test]
fn test_discover_appliances_directive() {
    let directive = Directive::discover_appliances(vec![json!({ "applianceId": "a1" })]);
    let value = SkillResponse::from(directive).to_value().unwrap();

    assert_eq!(value["header"]["namespace"], "Alexa.ConnectedHome.Discovery");
    assert_eq!(value["header"]["name"], "DiscoverAppliancesResponse");
    assert_eq!(value["header"]["payloadVersion"], "2");
    assert_eq!(
        value["payload"]["discoveredAppliances"],
        json!([{ "applianceId": "a1" }])
    );
}

#[test]
fn test_unexpected_information_names_the_fault() {
    let directive = Directive::unexpected_information("Alexa.ConnectedHome.Query");
    assert_eq!(directive.header.namespace, namespace::CONTROL_V2);
    assert_eq!(
        directive.header.name,
        namespace::name::UNEXPECTED_INFORMATION_RECEIVED_ERROR
    );
    assert_eq!(
        directive.payload,
        json!({ "faultingParameter": "Alexa.ConnectedHome.Query" })
    );
}

#[test]
fn test_error_event_echoes_endpoint_and_correlation_token() {
    let endpoint = json!({ "endpointId": "lamp-1" });
    let envelope = EventEnvelope::error(
        ErrorPayload::new(ErrorType::InternalError, "backend unreachable"),
        Some(endpoint.clone()),
        Some("corr-9".to_string()),
    );

    let value = SkillResponse::from(envelope).to_value().unwrap();
    assert_eq!(value["event"]["header"]["name"], "ErrorResponse");
    assert_eq!(value["event"]["header"]["namespace"], "Alexa");
    assert_eq!(value["event"]["header"]["correlationToken"], "corr-9");
    assert_eq!(value["event"]["endpoint"], endpoint);
    assert_eq!(value["event"]["payload"]["type"], "INTERNAL_ERROR");
    assert_eq!(value["event"]["payload"]["message"], "backend unreachable");
    assert!(value.get("context").is_none());
}

#[test]
fn test_error_payload_round_trips_through_value() {
    let payload = ErrorPayload::new(ErrorType::InvalidAuthorizationCredential, "expired");
    let value: Value = payload.clone().into();
    let parsed: ErrorPayload = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, payload);
}

#[test]
fn test_empty_passthrough_serializes_to_empty_object() {
    let value = SkillResponse::empty().to_value().unwrap();
    assert_eq!(value, json!({}));
}
