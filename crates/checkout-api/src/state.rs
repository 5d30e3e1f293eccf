//! # Application State
//!
//! Shared state for the Axum application: the payment provider client and
//! the read-only configuration. Built once at startup.

use crate::config::AppConfig;
use checkout_core::BoxedCheckoutProvider;
use checkout_stripe::StripeCheckoutProvider;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider client
    pub provider: BoxedCheckoutProvider,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState backed by Stripe, configured from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        let stripe = StripeCheckoutProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        if stripe.config().is_live_mode() && !config.is_production() {
            tracing::warn!("Live Stripe key in use outside production");
        }
        if stripe.config().is_test_mode() && config.is_production() {
            tracing::warn!("Test Stripe key in use in production");
        }

        Ok(Self::with_provider(config, Arc::new(stripe)))
    }

    /// Create state around an explicit provider
    pub fn with_provider(config: AppConfig, provider: BoxedCheckoutProvider) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }
}
