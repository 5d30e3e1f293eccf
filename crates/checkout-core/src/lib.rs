//! # checkout-core
//!
//! Core types and traits for the checkout session service.
//!
//! This crate provides:
//! - `SessionRequest` parsing and validation of the client body
//! - `SessionParams` describing the single provider call
//! - `CheckoutProvider` trait for implementing payment providers
//! - `OriginPolicy` for the CORS allow-list
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{create_checkout_session, RedirectUrls};
//!
//! let urls = RedirectUrls::new("https://contestra.com");
//! let result = create_checkout_session(&provider, &urls, br#"{"priceId":"price_123"}"#).await?;
//!
//! println!("session: {}", result.session_id);
//! ```

pub mod error;
pub mod origin;
pub mod provider;
pub mod service;
pub mod session;
pub mod urls;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult, PRICE_ID_REQUIRED, REDACTED_PROVIDER_MESSAGE};
pub use origin::{parse_origin, OriginPolicy};
pub use provider::{BoxedCheckoutProvider, CheckoutProvider};
pub use service::create_checkout_session;
pub use session::{
    BillingAddressCollection, CheckoutMode, CreatedSession, ErrorResult, PriceLineItem,
    SessionParams, SessionRequest, SessionResult,
};
pub use urls::RedirectUrls;
