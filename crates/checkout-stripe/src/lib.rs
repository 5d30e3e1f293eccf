//! # checkout-stripe
//!
//! Stripe checkout provider for the checkout session service.
//!
//! `StripeCheckoutProvider` opens a hosted Checkout Session for a single
//! catalog price and hands back the session id.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutProvider, RedirectUrls, SessionParams, SessionRequest};
//! use checkout_stripe::StripeCheckoutProvider;
//!
//! // Create provider from environment
//! let provider = StripeCheckoutProvider::from_env()?;
//!
//! let request = SessionRequest::new("price_123");
//! let params = SessionParams::for_request(&request, &RedirectUrls::new("https://contestra.com"));
//! let session = provider.create_session(&params).await?;
//!
//! // Hand session.session_id back to the browser for redirectToCheckout
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckoutProvider;
pub use config::StripeConfig;
