use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

use super::ParamValue;
use crate::client::ApiClientError;

/// Represents HTTP headers for an API call.
///
/// Headers use the same scalar [`ParamValue`] as path and query parameters;
/// absent values are not sent.
#[derive(Debug, Clone, Default)]
pub struct CallHeaders {
    headers: IndexMap<String, ParamValue>,
}

impl CallHeaders {
    /// Creates a new empty `CallHeaders` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing any previous value with the same name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use magnet_client_core::CallHeaders;
    ///
    /// let headers = CallHeaders::new()
    ///     .add_header("X-Request-ID", "abc-123-def")
    ///     .add_header("X-Retry", None::<i64>);
    /// assert_eq!(headers.len(), 1);
    /// ```
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merges another `CallHeaders` instance into this one.
    ///
    /// Headers from the other instance override headers with the same name.
    pub fn merge(mut self, other: Self) -> Self {
        self.headers.extend(other.headers);
        self
    }

    /// Whether a present value exists for `name`.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.get(name).is_some_and(ParamValue::is_present)
    }

    /// Checks if no header will be sent.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of headers that will be sent.
    pub fn len(&self) -> usize {
        self.headers
            .values()
            .filter(|value| value.is_present())
            .count()
    }

    /// Converts the present headers into an HTTP header map.
    ///
    /// # Errors
    ///
    /// Fails on a header name or value that is not valid HTTP.
    pub fn to_header_map(&self) -> Result<HeaderMap, ApiClientError> {
        let mut result = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let Some(text) = value.to_text() else {
                continue;
            };
            result.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(&text)?,
            );
        }
        Ok(result)
    }
}
