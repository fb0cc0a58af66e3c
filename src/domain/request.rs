use reqwest::{Method, Url};

use crate::error::ValidationError;

/// One request replayed for the whole run. Built once and shared read-only
/// by every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
    bearer_token: Option<String>,
}

impl RequestSpec {
    /// Builds a request description from raw operator input.
    ///
    /// The verb is matched case-insensitively and stored upper-cased. An empty
    /// token is treated as no token.
    ///
    /// # Errors
    ///
    /// Returns an error when the verb is not a valid HTTP method token, or the
    /// URL is not an absolute `http`/`https` URL with a host.
    pub fn new(
        verb: &str,
        url: &str,
        body: Option<Vec<u8>>,
        bearer_token: Option<String>,
    ) -> Result<Self, ValidationError> {
        let normalized = verb.trim().to_ascii_uppercase();
        let method = Method::from_bytes(normalized.as_bytes()).map_err(|_err| {
            ValidationError::InvalidMethod {
                value: verb.to_owned(),
            }
        })?;

        let parsed = Url::parse(url.trim()).map_err(|err| ValidationError::InvalidUrl {
            url: url.to_owned(),
            source: err,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::UrlMissingHost);
        }

        let bearer_token = bearer_token.filter(|token| !token.is_empty());

        Ok(Self {
            method,
            url: parsed,
            body,
            bearer_token,
        })
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn verb(&self) -> &str {
        self.method.as_str()
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}
