//! # Session Types
//!
//! Request, result and provider-call types for checkout session creation.

use crate::error::{CheckoutError, CheckoutResult};
use crate::urls::RedirectUrls;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Checkout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    /// One-time payment
    Payment,
    /// Recurring subscription
    #[default]
    Subscription,
}

impl CheckoutMode {
    /// Wire value understood by the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

impl fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutMode {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payment" => Ok(CheckoutMode::Payment),
            "subscription" => Ok(CheckoutMode::Subscription),
            other => Err(CheckoutError::Validation(format!("Invalid mode: {}", other))),
        }
    }
}

/// A validated request to open one checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    /// Provider price identifier (never empty)
    pub price_reference: String,
    /// Transaction mode
    pub mode: CheckoutMode,
    /// Customer email to prefill on the hosted page
    pub customer_email: Option<String>,
}

impl SessionRequest {
    /// Create a subscription request for a price
    pub fn new(price_reference: impl Into<String>) -> Self {
        Self {
            price_reference: price_reference.into(),
            mode: CheckoutMode::default(),
            customer_email: None,
        }
    }

    /// Builder: set mode
    pub fn with_mode(mut self, mode: CheckoutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set customer email
    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Parse and validate a JSON request body.
    ///
    /// Accepts `{"priceId": string, "mode"?: string, "customerEmail"?: string}`.
    /// Undecodable bodies, non-object bodies and missing, non-string or
    /// blank `priceId` values all fail with "Price ID is required".
    pub fn from_json(body: &[u8]) -> CheckoutResult<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| CheckoutError::price_id_required())?;
        let fields = value.as_object().ok_or_else(CheckoutError::price_id_required)?;

        let price_reference = fields
            .get("priceId")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(CheckoutError::price_id_required)?
            .to_string();

        let mode = match fields.get("mode") {
            None | Some(Value::Null) => CheckoutMode::default(),
            Some(Value::String(s)) => s.parse()?,
            Some(other) => {
                return Err(CheckoutError::Validation(format!("Invalid mode: {}", other)))
            }
        };

        let customer_email = fields
            .get("customerEmail")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Self {
            price_reference,
            mode,
            customer_email,
        })
    }
}

/// Successful outcome returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    /// Opaque provider session identifier
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Failure body returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    #[serde(rename = "error")]
    pub message: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Billing address collection setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingAddressCollection {
    Required,
}

impl BillingAddressCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingAddressCollection::Required => "required",
        }
    }
}

/// A line item referencing a catalog price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLineItem {
    pub price: String,
    pub quantity: u32,
}

/// Everything a provider needs to open one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    pub mode: CheckoutMode,
    pub line_items: Vec<PriceLineItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub billing_address_collection: BillingAddressCollection,
    pub allow_promotion_codes: bool,
    pub customer_email: Option<String>,
}

impl SessionParams {
    /// Build the provider call for a validated request: one line item of
    /// quantity 1, required billing address, promotion codes on.
    pub fn for_request(request: &SessionRequest, urls: &RedirectUrls) -> Self {
        Self {
            mode: request.mode,
            line_items: vec![PriceLineItem {
                price: request.price_reference.clone(),
                quantity: 1,
            }],
            success_url: urls.success_url(),
            cancel_url: urls.cancel_url(),
            billing_address_collection: BillingAddressCollection::Required,
            allow_promotion_codes: true,
            customer_email: request.customer_email.clone(),
        }
    }
}

/// Session as reported back by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSession {
    /// Opaque session identifier
    pub session_id: String,
    /// Hosted checkout URL, when the provider returns one
    pub checkout_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_subscription() {
        let request = SessionRequest::from_json(br#"{"priceId":"price_123"}"#).unwrap();
        assert_eq!(request.price_reference, "price_123");
        assert_eq!(request.mode, CheckoutMode::Subscription);
        assert!(request.customer_email.is_none());

        let request =
            SessionRequest::from_json(br#"{"priceId":"price_123","mode":null}"#).unwrap();
        assert_eq!(request.mode, CheckoutMode::Subscription);
    }

    #[test]
    fn test_explicit_payment_mode() {
        let request =
            SessionRequest::from_json(br#"{"priceId":"price_1","mode":"payment"}"#).unwrap();
        assert_eq!(request.mode, CheckoutMode::Payment);
    }

    #[test]
    fn test_missing_or_blank_price_id() {
        let bodies: [&[u8]; 7] = [
            br#"{}"#,
            br#"{"priceId":""}"#,
            br#"{"priceId":"   "}"#,
            br#"{"priceId":null}"#,
            br#"{"priceId":42}"#,
            br#"["price_123"]"#,
            b"not json",
        ];

        for body in bodies {
            let err = SessionRequest::from_json(body).unwrap_err();
            assert_eq!(err, CheckoutError::price_id_required());
        }
    }

    #[test]
    fn test_price_id_forwarded_untrimmed() {
        let request = SessionRequest::from_json(br#"{"priceId":" price_123 "}"#).unwrap();
        assert_eq!(request.price_reference, " price_123 ");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = SessionRequest::from_json(br#"{"priceId":"price_1","mode":"setup"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid mode: setup");

        let err =
            SessionRequest::from_json(br#"{"priceId":"price_1","mode":5}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid mode: 5");
    }

    #[test]
    fn test_customer_email_passthrough() {
        let request = SessionRequest::from_json(
            br#"{"priceId":"price_1","customerEmail":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(request.customer_email.as_deref(), Some("ada@example.com"));

        let request =
            SessionRequest::from_json(br#"{"priceId":"price_1","customerEmail":""}"#).unwrap();
        assert!(request.customer_email.is_none());
    }

    #[test]
    fn test_params_for_request() {
        let urls = RedirectUrls::new("https://contestra.com");
        let request = SessionRequest::new("price_123").with_mode(CheckoutMode::Payment);
        let params = SessionParams::for_request(&request, &urls);

        assert_eq!(params.mode, CheckoutMode::Payment);
        assert_eq!(
            params.line_items,
            vec![PriceLineItem {
                price: "price_123".into(),
                quantity: 1
            }]
        );
        assert_eq!(
            params.success_url,
            "https://contestra.com/success.html?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(params.cancel_url, "https://contestra.com/pricing.html");
        assert_eq!(params.billing_address_collection, BillingAddressCollection::Required);
        assert!(params.allow_promotion_codes);
    }

    #[test]
    fn test_result_wire_names() {
        let ok = serde_json::to_value(SessionResult {
            session_id: "cs_test_abc".into(),
        })
        .unwrap();
        assert_eq!(ok, serde_json::json!({"sessionId": "cs_test_abc"}));

        let err = serde_json::to_value(ErrorResult::new("Price ID is required")).unwrap();
        assert_eq!(err, serde_json::json!({"error": "Price ID is required"}));
    }
}
