//! # Request Handlers
//!
//! Axum request handlers for the checkout API.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use checkout_core::{create_checkout_session, CheckoutError, ErrorResult, SessionResult};
use tracing::{error, info, instrument};

fn checkout_error_to_response(
    err: CheckoutError,
    redact: bool,
) -> (StatusCode, Json<ErrorResult>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResult::new(err.client_message(redact))))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout-session",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// CORS preflight: empty body, headers added by the CORS middleware
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Body extraction failures (e.g. over the 2 MiB limit) use the same
/// flat 400 error shape as every other request failure
fn rejection_to_error(rejection: BytesRejection) -> CheckoutError {
    CheckoutError::Validation(rejection.body_text())
}

/// Create a checkout session for one price
#[instrument(skip(state, body))]
pub async fn create_checkout(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SessionResult>, (StatusCode, Json<ErrorResult>)> {
    let body = body.map_err(|rejection| {
        let err = rejection_to_error(rejection);
        error!("Rejected request body: {}", err);
        checkout_error_to_response(err, state.config.redact_provider_errors)
    })?;

    let result = create_checkout_session(state.provider.as_ref(), &state.config.urls, &body)
        .await
        .map_err(|e| {
            error!(
                provider = state.provider.provider_name(),
                "Failed to create checkout: {}", e
            );
            checkout_error_to_response(e, state.config.redact_provider_errors)
        })?;

    info!("Created checkout session: {}", result.session_id);

    Ok(Json(result))
}
