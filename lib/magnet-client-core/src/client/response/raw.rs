use bytes::Bytes;
use headers::{ContentType, HeaderMapExt};
use http::{HeaderMap, StatusCode};

use crate::client::DecodeError;

/// A successful transport response, before decoding.
#[derive(Clone, derive_more::Debug)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    #[debug("{} bytes", body.len())]
    body: Bytes,
}

impl RawResponse {
    /// Creates a raw response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// The HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The declared content type, if any.
    pub fn content_type(&self) -> Option<ContentType> {
        self.headers.typed_get::<ContentType>()
    }

    /// Whether the response carries no content (`204` or an empty body).
    pub fn is_empty(&self) -> bool {
        self.status == StatusCode::NO_CONTENT || self.body.is_empty()
    }

    /// Splits the response into status, headers and body.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body)
    }

    /// The body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Utf8`] if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, DecodeError> {
        std::str::from_utf8(&self.body).map_err(DecodeError::Utf8)
    }
}

impl From<http::Response<Bytes>> for RawResponse {
    fn from(value: http::Response<Bytes>) -> Self {
        let (parts, body) = value.into_parts();
        Self::new(parts.status, parts.headers, body)
    }
}
