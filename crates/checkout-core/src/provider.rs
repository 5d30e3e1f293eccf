//! # Checkout Provider Trait
//!
//! Seam between the checkout handler and a hosted payment provider.
//! The handler only ever sees an opaque session id come back.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          CheckoutProvider (trait)            │
//! │  ├── create_session()                        │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴────────┐       ┌────────┴───────┐
//!  │ StripeCheckout │       │  test doubles  │
//!  │    Provider    │       │                │
//!  └────────────────┘       └────────────────┘
//! ```

use crate::error::CheckoutResult;
use crate::session::{CreatedSession, SessionParams};
use async_trait::async_trait;
use std::sync::Arc;

/// A hosted payment provider able to open checkout sessions.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Open one checkout session. Called exactly once per request, never
    /// retried.
    async fn create_session(&self, params: &SessionParams) -> CheckoutResult<CreatedSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedCheckoutProvider = Arc<dyn CheckoutProvider>;
