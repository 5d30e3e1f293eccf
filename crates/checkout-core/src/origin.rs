//! # Origin Policy
//!
//! CORS allow-list for the checkout endpoint.
//!
//! An allow-listed request origin is echoed back. Anything else,
//! including a missing `Origin` header, gets the configured default
//! origin; the untrusted value is never reflected.

use crate::error::{CheckoutError, CheckoutResult};
use url::Url;

/// Default `Access-Control-Allow-Methods` value
pub const DEFAULT_ALLOW_METHODS: &str = "POST, OPTIONS";

/// `Access-Control-Allow-Headers` value
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Serialized origin (`scheme://host[:port]`) of an http(s) URL.
///
/// Host case and default ports are normalized the way browsers serialize
/// the `Origin` header. URLs carrying credentials are rejected.
pub fn parse_origin(raw: &str) -> CheckoutResult<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CheckoutError::Configuration(format!("Invalid origin {:?}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CheckoutError::Configuration(format!(
            "Origin must be an http(s) URL: {:?}",
            raw
        )));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(CheckoutError::Configuration(format!(
            "Origin must not carry credentials: {}",
            url.origin().ascii_serialization()
        )));
    }

    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(CheckoutError::Configuration(format!(
            "Origin is opaque: {:?}",
            raw
        )));
    }
    Ok(origin.ascii_serialization())
}

/// Allow-list of front-end origins plus the fallback origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    /// Origins that are echoed back verbatim
    allowed_origins: Vec<String>,

    /// Origin sent when the request's origin is not allow-listed
    default_origin: String,

    /// Value of `Access-Control-Allow-Methods`
    allow_methods: String,
}

impl OriginPolicy {
    /// Create a policy whose only allowed origin is the default one
    pub fn new(default_origin: &str) -> CheckoutResult<Self> {
        let default_origin = parse_origin(default_origin)?;
        Ok(Self {
            allowed_origins: vec![default_origin.clone()],
            default_origin,
            allow_methods: DEFAULT_ALLOW_METHODS.to_string(),
        })
    }

    /// Builder: replace the allow-list. Blank entries are skipped.
    pub fn with_allowed_origins<I, S>(mut self, origins: I) -> CheckoutResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_origins = origins
            .into_iter()
            .filter(|o| !o.as_ref().trim().is_empty())
            .map(|o| parse_origin(o.as_ref()))
            .collect::<CheckoutResult<Vec<_>>>()?;
        Ok(self)
    }

    /// Builder: set `Access-Control-Allow-Methods`
    pub fn with_allow_methods(mut self, methods: impl Into<String>) -> Self {
        self.allow_methods = methods.into();
        self
    }

    /// Check whether an origin is allow-listed (exact match)
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    /// Value for `Access-Control-Allow-Origin` given the request's origin
    pub fn allow_origin_for<'a>(&'a self, origin: Option<&'a str>) -> &'a str {
        match origin {
            Some(o) if self.is_allowed(o) => o,
            _ => &self.default_origin,
        }
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn default_origin(&self) -> &str {
        &self.default_origin
    }

    pub fn allow_methods(&self) -> &str {
        &self.allow_methods
    }

    pub fn allow_headers(&self) -> &'static str {
        ALLOW_HEADERS
    }
}
