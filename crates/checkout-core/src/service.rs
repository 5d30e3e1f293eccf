//! # Checkout Service
//!
//! Validate a request body, open one session with the provider and
//! return its id. No HTTP concerns live here.

use crate::error::CheckoutResult;
use crate::provider::CheckoutProvider;
use crate::session::{SessionParams, SessionRequest, SessionResult};
use crate::urls::RedirectUrls;
use tracing::{debug, info};

/// Create a checkout session from a raw JSON request body.
///
/// Validation failures return before the provider is contacted.
pub async fn create_checkout_session(
    provider: &dyn CheckoutProvider,
    urls: &RedirectUrls,
    body: &[u8],
) -> CheckoutResult<SessionResult> {
    let request = SessionRequest::from_json(body)?;
    info!(
        provider = provider.provider_name(),
        price_id = %request.price_reference,
        mode = ?request.mode,
        "Creating checkout session"
    );

    let params = SessionParams::for_request(&request, urls);
    let session = provider.create_session(&params).await?;

    if let Some(url) = &session.checkout_url {
        debug!(session_id = %session.session_id, checkout_url = %url, "Hosted checkout page ready");
    }

    Ok(SessionResult {
        session_id: session.session_id,
    })
}
