//! # CORS Headers
//!
//! Response-header middleware for the checkout endpoint. Unlike
//! `tower_http::cors`, an unrecognized origin still gets an
//! `Access-Control-Allow-Origin` header: the configured default origin.

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN, VARY,
        },
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use checkout_core::OriginPolicy;

/// Attach CORS and content-type headers to every response
pub async fn cors_headers(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let mut response = next.run(request).await;
    apply(&state.config.origins, origin.as_deref(), response.headers_mut());
    response
}

fn apply(policy: &OriginPolicy, origin: Option<&str>, headers: &mut HeaderMap) {
    let allow_origin = policy.allow_origin_for(origin);

    // Config values are checked at load; request origins came from a header.
    if let Ok(value) = HeaderValue::from_str(allow_origin) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    if let Ok(value) = HeaderValue::from_str(policy.allow_methods()) {
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, value);
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(policy.allow_headers()),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(VARY, HeaderValue::from_static("Origin"));
}
