use crate::backend::Operation;
use crate::testing::{ScriptedTransport, bridge_with};
use http::StatusCode;
use serde_json::{Value, json};

fn create_v3_request(namespace: &str) -> Value {
    json!({
        "directive": {
            "header": { "namespace": namespace, "name": "Any", "payloadVersion": "3", "messageId": "m" },
            "endpoint": { "scope": { "token": "tok" } },
            "payload": { "scope": { "token": "tok" }, "grantee": { "token": "tok" } }
        }
    })
}

fn create_v2_request(namespace: &str) -> Value {
    json!({
        "header": { "namespace": namespace, "name": "Any", "payloadVersion": "2", "messageId": "m" },
        "payload": { "accessToken": "tok" }
    })
}

async fn operation_for(request: Value) -> Operation {
    let transport = ScriptedTransport::json(StatusCode::OK, json!({}));
    let bridge = bridge_with(transport.clone());
    bridge.dispatch(request).await.expect("dispatch produced no response");
    transport.last_request().operation
}

#[tokio::test]
async fn test_v3_dispatch_by_namespace() {
    assert_eq!(
        operation_for(create_v3_request("Alexa.Discovery")).await,
        Operation::DiscoveryV3
    );
    assert_eq!(
        operation_for(create_v3_request("Alexa.Authorization")).await,
        Operation::AuthorizeV3
    );
    for namespace in [
        "Alexa",
        "Alexa.PowerController",
        "Alexa.ColorController",
        "Unknown.Namespace",
    ] {
        assert_eq!(
            operation_for(create_v3_request(namespace)).await,
            Operation::ControlV3,
            "namespace {namespace}"
        );
    }
}

#[tokio::test]
async fn test_v2_dispatch_by_namespace() {
    assert_eq!(
        operation_for(create_v2_request("Alexa.ConnectedHome.Discovery")).await,
        Operation::DiscoveryV2
    );
    assert_eq!(
        operation_for(create_v2_request("Alexa.ConnectedHome.Control")).await,
        Operation::ControlV2
    );
}

#[tokio::test]
async fn test_v2_unsupported_namespace_makes_no_call() {
    let transport = ScriptedTransport::json(StatusCode::OK, json!({}));
    let bridge = bridge_with(transport.clone());

    let response = bridge
        .dispatch(create_v2_request("Alexa.ConnectedHome.System"))
        .await
        .unwrap()
        .to_value()
        .unwrap();

    assert_eq!(response["header"]["namespace"], "Alexa.ConnectedHome.Control");
    assert_eq!(response["header"]["name"], "UnexpectedInformationReceivedError");
    assert_eq!(
        response["payload"]["faultingParameter"],
        "Alexa.ConnectedHome.System"
    );
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_v2_without_namespace_is_unexpected_information() {
    let transport = ScriptedTransport::json(StatusCode::OK, json!({}));
    let bridge = bridge_with(transport.clone());

    let request = json!({
        "header": { "payloadVersion": "2", "name": "X" },
        "payload": { "accessToken": "tok" }
    });
    let response = bridge
        .dispatch(request)
        .await
        .unwrap()
        .to_value()
        .unwrap();

    assert_eq!(response["header"]["name"], "UnexpectedInformationReceivedError");
    assert_eq!(response["payload"]["faultingParameter"], "");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_version_produces_no_response() {
    let transport = ScriptedTransport::json(StatusCode::OK, json!({}));
    let bridge = bridge_with(transport.clone());

    let request = json!({ "header": { "namespace": "Alexa.ConnectedHome.Discovery" } });
    assert!(bridge.dispatch(request).await.is_none());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_handler_failure_is_swallowed() {
    let bridge = bridge_with(ScriptedTransport::raw(StatusCode::OK, "<html>oops</html>"));

    assert!(
        bridge
            .dispatch(create_v3_request("Alexa.Discovery"))
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_each_response_has_a_fresh_message_id() {
    let bridge = bridge_with(ScriptedTransport::json(StatusCode::OK, json!({})));

    let first = bridge
        .dispatch(create_v3_request("Alexa.Discovery"))
        .await
        .unwrap()
        .to_value()
        .unwrap();
    let second = bridge
        .dispatch(create_v3_request("Alexa.Discovery"))
        .await
        .unwrap()
        .to_value()
        .unwrap();

    let first_id = first["event"]["header"]["messageId"].as_str().unwrap();
    let second_id = second["event"]["header"]["messageId"].as_str().unwrap();
    assert_ne!(first_id, second_id);
    assert_ne!(first_id, "m");
}

#[test]
fn test_bridge_exposes_its_config() {
    let bridge = bridge_with(ScriptedTransport::json(StatusCode::OK, json!({})));
    assert_eq!(bridge.config().backend.hostname, "home.example.com");
    assert_eq!(bridge.config().skill.region, "EU");
}
