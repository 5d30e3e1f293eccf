//! # Redirect URLs
//!
//! Success and cancel URLs handed to the provider, derived from the
//! deployment's canonical domain.

/// Placeholder the provider substitutes with the created session id
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Configuration for URLs used in checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrls {
    /// Base URL of the site (e.g., "https://contestra.com")
    pub base_url: String,
    /// Success page path (e.g., "/success.html")
    pub success_path: String,
    /// Cancel page path (e.g., "/pricing.html")
    pub cancel_path: String,
}

impl RedirectUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            success_path: "/success.html".to_string(),
            cancel_path: "/pricing.html".to_string(),
        }
    }

    /// Builder: set success page path
    pub fn with_success_path(mut self, path: impl Into<String>) -> Self {
        self.success_path = normalize_path(path.into());
        self
    }

    /// Builder: set cancel page path
    pub fn with_cancel_path(mut self, path: impl Into<String>) -> Self {
        self.cancel_path = normalize_path(path.into());
        self
    }

    /// Success URL with the session id placeholder appended
    pub fn success_url(&self) -> String {
        let url = format!("{}{}", self.base_url, self.success_path);
        if url.contains('?') {
            format!("{}&session_id={}", url, SESSION_ID_PLACEHOLDER)
        } else {
            format!("{}?session_id={}", url, SESSION_ID_PLACEHOLDER)
        }
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url, self.cancel_path)
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let urls = RedirectUrls::new("https://contestra.com/");

        assert_eq!(
            urls.success_url(),
            "https://contestra.com/success.html?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(urls.cancel_url(), "https://contestra.com/pricing.html");
    }

    #[test]
    fn test_custom_paths() {
        let urls = RedirectUrls::new("https://example.com")
            .with_success_path("thanks?ref=checkout")
            .with_cancel_path("/plans");

        assert_eq!(
            urls.success_url(),
            "https://example.com/thanks?ref=checkout&session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(urls.cancel_url(), "https://example.com/plans");
    }
}
