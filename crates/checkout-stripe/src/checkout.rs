//! # Stripe Checkout Sessions
//!
//! Implementation of the Stripe Checkout Sessions API
//! (`POST /v1/checkout/sessions`, form-encoded).

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutProvider, CheckoutResult, CreatedSession, SessionParams,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Stripe Checkout Session provider
///
/// Uses Stripe's hosted checkout page. One instance is built at startup
/// and shared across requests.
pub struct StripeCheckoutProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutProvider {
    /// Create a new Stripe checkout provider
    pub fn new(config: StripeConfig) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CheckoutError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Build form data for the Stripe API
    fn form_params(params: &SessionParams) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = vec![
            ("mode".to_string(), params.mode.as_str().to_string()),
            ("success_url".to_string(), params.success_url.clone()),
            ("cancel_url".to_string(), params.cancel_url.clone()),
            (
                "billing_address_collection".to_string(),
                params.billing_address_collection.as_str().to_string(),
            ),
            (
                "allow_promotion_codes".to_string(),
                params.allow_promotion_codes.to_string(),
            ),
        ];

        for (i, item) in params.line_items.iter().enumerate() {
            form.push((format!("line_items[{}][price]", i), item.price.clone()));
            form.push((format!("line_items[{}][quantity]", i), item.quantity.to_string()));
        }

        if let Some(ref email) = params.customer_email {
            form.push(("customer_email".to_string(), email.clone()));
        }

        form
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutProvider {
    #[instrument(skip(self, params), fields(mode = %params.mode))]
    async fn create_session(&self, params: &SessionParams) -> CheckoutResult<CreatedSession> {
        let form = Self::form_params(params);
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        debug!(
            "Creating Stripe checkout session: {} items, mode={}",
            params.line_items.len(),
            params.mode
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(CheckoutError::Provider {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(CheckoutError::Provider {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session: StripeCheckoutSessionResponse =
            serde_json::from_str(&body).map_err(|e| {
                CheckoutError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!("Created Stripe checkout session: id={}", session.id);

        Ok(CreatedSession {
            session_id: session.id,
            checkout_url: session.url,
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
