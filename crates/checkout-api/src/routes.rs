//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::cors;
use crate::handlers;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - POST    {checkout_path} - Create checkout session
/// - OPTIONS {checkout_path} - CORS preflight
/// - GET     /health         - Health check
///
/// `checkout_path` defaults to `/create-checkout-session`.
pub fn create_router(state: AppState) -> Router {
    let checkout_routes = Router::new()
        .route(
            &state.config.checkout_path,
            post(handlers::create_checkout).options(handlers::preflight),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::cors_headers,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(checkout_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
