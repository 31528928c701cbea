use crate::SkillBridge;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use serde_json::Value;
use tracing::{debug, error};

/// Turns one HTTP exchange into one directive dispatch.
pub async fn handle_request(
    bridge: &SkillBridge,
    request: Request<Incoming>,
) -> Response<Full<Bytes>> {
    if request.method() != Method::POST {
        debug!(method = %request.method(), "Unsupported method");
        return respond(StatusCode::METHOD_NOT_ALLOWED, Bytes::new());
    }

    let body = match request.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(error) => {
            debug!(?error, "Failed to read the request body");
            return respond(StatusCode::BAD_REQUEST, Bytes::new());
        }
    };

    let directive: Value = match serde_json::from_slice(&body) {
        Ok(directive) => directive,
        Err(error) => {
            debug!(?error, "Request body is not JSON");
            return respond(StatusCode::BAD_REQUEST, Bytes::new());
        }
    };

    let Some(response) = bridge.dispatch(directive).await else {
        return respond(StatusCode::INTERNAL_SERVER_ERROR, Bytes::new());
    };

    match serde_json::to_vec(&response) {
        Ok(encoded) => respond(StatusCode::OK, Bytes::from(encoded)),
        Err(error) => {
            error!(?error, "Failed to encode the response");
            respond(StatusCode::INTERNAL_SERVER_ERROR, Bytes::new())
        }
    }
}

fn respond(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    let has_body = !body.is_empty();
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    if has_body {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    response
}
