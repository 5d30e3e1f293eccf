//! # checkout-api
//!
//! HTTP API layer for the checkout session service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The checkout-session endpoint and its CORS preflight
//! - Startup configuration from the environment
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-checkout-session` | Create checkout session |
//! | OPTIONS | `/create-checkout-session` | CORS preflight |

pub mod config;
pub mod cors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, FileConfig};
pub use routes::create_router;
pub use state::AppState;
