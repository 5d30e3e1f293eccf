//! # Checkout Error Types
//!
//! Typed error handling for checkout session creation.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Message returned when the request carries no usable price reference
pub const PRICE_ID_REQUIRED: &str = "Price ID is required";

/// Message returned in place of provider internals when redaction is enabled
pub const REDACTED_PROVIDER_MESSAGE: &str = "Unable to create checkout session";

/// Core error type for all checkout operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Configuration errors (missing keys, invalid config). Startup only.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// The payment provider rejected the session-creation call
    #[error("{message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with the provider
    #[error("{0}")]
    Network(String),

    /// Provider answered with a body we could not read
    #[error("{0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Shorthand for the missing price reference failure
    pub fn price_id_required() -> Self {
        CheckoutError::Validation(PRICE_ID_REQUIRED.to_string())
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Request-time failures all answer 400: bad input and a provider
    /// rejection are indistinguishable at the transport level.
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::Validation(_) => 400,
            CheckoutError::Provider { .. } => 400,
            CheckoutError::Network(_) => 400,
            CheckoutError::Serialization(_) => 400,
        }
    }

    /// True when the failure originated at or beyond the provider boundary
    pub fn is_provider_side(&self) -> bool {
        matches!(
            self,
            CheckoutError::Provider { .. }
                | CheckoutError::Network(_)
                | CheckoutError::Serialization(_)
        )
    }

    /// Message to hand back to the caller.
    ///
    /// With `redact` set, provider-side failures are replaced with a
    /// generic message. Validation messages are always returned verbatim.
    pub fn client_message(&self, redact: bool) -> String {
        if redact && self.is_provider_side() {
            REDACTED_PROVIDER_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_time_errors_are_bad_request() {
        let errors = [
            CheckoutError::price_id_required(),
            CheckoutError::Provider {
                provider: "stripe".into(),
                message: "No such price: 'price_x'".into(),
            },
            CheckoutError::Network("timed out".into()),
            CheckoutError::Serialization("missing field `id`".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), 400, "{err:?}");
        }
        assert_eq!(CheckoutError::Configuration("x".into()).status_code(), 500);
    }

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(CheckoutError::price_id_required().to_string(), "Price ID is required");

        let err = CheckoutError::Provider {
            provider: "stripe".into(),
            message: "No such price: 'price_x'".into(),
        };
        assert_eq!(err.to_string(), "No such price: 'price_x'");
    }

    #[test]
    fn test_client_message_redaction() {
        let provider = CheckoutError::Provider {
            provider: "stripe".into(),
            message: "Invalid API Key provided: sk_test_****".into(),
        };
        assert_eq!(provider.client_message(false), "Invalid API Key provided: sk_test_****");
        assert_eq!(provider.client_message(true), REDACTED_PROVIDER_MESSAGE);

        let validation = CheckoutError::price_id_required();
        assert!(!validation.is_provider_side());
        assert_eq!(validation.client_message(true), PRICE_ID_REQUIRED);
    }
}
