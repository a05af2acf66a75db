//! Request middleware applied ahead of route dispatch.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Maximum accepted size for JSON request bodies.
const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Error payload returned when a request body is rejected.
#[derive(Debug, Serialize)]
pub struct BodyErrorResponse {
    /// Human-readable rejection reason.
    pub error: &'static str,
}

/// Validate JSON request bodies before dispatch.
///
/// Requests declaring `Content-Type: application/json` have their body
/// buffered and syntax-checked. Malformed JSON is answered with 400 and
/// bodies over [`JSON_BODY_LIMIT`] with 413; everything else passes
/// through with the body re-attached.
pub async fn parse_json_body(request: Request, next: Next) -> Response {
    if !declares_json(request.headers()) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, JSON_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(BodyErrorResponse {
                    error: "request body too large",
                }),
            )
                .into_response();
        }
    };

    // An empty body is not a parse error: requests may declare JSON and
    // send nothing.
    if !bytes.is_empty() && serde_json::from_slice::<serde::de::IgnoredAny>(&bytes).is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(BodyErrorResponse {
                error: "malformed JSON body",
            }),
        )
            .into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Whether the request declares a JSON body.
fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}
