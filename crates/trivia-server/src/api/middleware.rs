//! Request correlation and CORS headers

use std::time::Instant;

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    AUTHORIZATION, CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{Any, CorsLayer};
use trivia_core_types::{RequestContext, RequestId, TraceId};

/// Correlation header echoed on every response
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upstream trace header; echoed only when the client sent one
pub const TRACE_ID_HEADER: &str = "x-trace-id";

const MAX_ID_LEN: usize = 128;

pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

fn inbound_id(req: &Request, header: &str) -> Option<String> {
    req.headers()
        .get(header)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_ID_LEN)
        .map(str::to_string)
}

/// Attach a `RequestContext` to the request and echo its ids on the response
///
/// Inbound `x-request-id` and `x-trace-id` values are reused when they are
/// short printable text; a missing request id is generated.
pub async fn request_context(mut req: Request, next: Next) -> Response {
    let request_id = inbound_id(&req, REQUEST_ID_HEADER)
        .map(RequestId::from_string)
        .unwrap_or_default();
    let mut ctx = RequestContext::with_request_id(request_id);
    if let Some(trace_id) = inbound_id(&req, TRACE_ID_HEADER) {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ctx.clone());

    let start = Instant::now();
    let mut response = next.run(req).await;

    tracing::info!(
        request_id = ctx.request_id.as_str(),
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str),
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    if let Ok(value) = HeaderValue::from_str(ctx.request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    if let Some(trace_id) = &ctx.trace_id {
        if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
            response.headers_mut().insert(TRACE_ID_HEADER, value);
        }
    }
    response
}

/// Preflight handling
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Cross-origin headers asserted on every response, errors included
pub async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    response
}
