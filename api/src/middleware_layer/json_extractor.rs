//! Normalises extractor rejections (plain-text 400/422) into the JSON envelope.

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::debug;

use crate::core::http::response_envelope::{ApiErrorDetail, ApiResponse};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

/// Reads the caller's request id, if any.
pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Field named in a serde message such as "missing field `q`".
fn field_from_serde_msg(msg: &str) -> Option<String> {
    let start = msg.find('`')? + 1;
    let len = msg[start..].find('`')?;
    Some(msg[start..start + len].to_string())
}

fn generate_request_id() -> String {
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    format!("req-{nanos}")
}

fn is_json(parts: &axum::http::response::Parts) -> bool {
    parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let incoming_id = request_id(req.headers()).map(str::to_string);
    let res = next.run(req).await;
    let status = res.status();

    // Only 400/422 are rewritten; everything else passes through.
    if !(status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY) {
        return res;
    }

    let (mut parts, bytes) = take_body(res).await;
    let req_id = incoming_id.unwrap_or_else(generate_request_id);
    if let Ok(value) = HeaderValue::from_str(&req_id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    if is_json(&parts) {
        return Response::from_parts(parts, bytes.into());
    }

    let original = String::from_utf8_lossy(&bytes);
    debug!(request_id = %req_id, %status, rejection = %original.trim(), "rejection mapped to envelope");

    let path = field_from_serde_msg(&original);
    let hint = path
        .as_deref()
        .map(|field| format!("Provide the `{field}` query parameter, e.g. /api/search?{field}=batman"));

    let envelope = ApiResponse::<()>::error(
        if status == StatusCode::BAD_REQUEST {
            "BAD_REQUEST"
        } else {
            "UNPROCESSABLE_ENTITY"
        },
        original.trim(),
        vec![ApiErrorDetail { path, hint }],
    )
    .with_request_id(Some(&req_id));

    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Response::from_parts(parts, body.into())
}
