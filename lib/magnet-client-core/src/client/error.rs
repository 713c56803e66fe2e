use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

/// Errors that can occur when calling the magnet API.
///
/// The first five variants are the runtime taxonomy callers branch on:
/// a missing required parameter, a non-success HTTP status, a malformed
/// success body, a transport failure, and a cancelled call.
/// The remaining variants are request-building failures that indicate a
/// programming error and are never worth retrying.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// A required call parameter was omitted.
    ///
    /// Detected before any network I/O.
    Required(RequiredError),

    /// The server answered with a non-2xx status.
    Api(ApiError),

    /// The success response could not be decoded into the expected shape.
    Decode(DecodeError),

    /// Transport-level failure (DNS, connection, timeout, ...).
    Network(TransportError),

    /// The caller cancelled the call before the response arrived.
    #[display("Call cancelled")]
    #[from(skip)]
    Cancelled,

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// URL parsing error when constructing request URLs.
    Url(url::ParseError),

    /// HTTP protocol error from the http crate.
    Http(http::Error),

    /// JSON request body serialization error.
    Json(serde_json::Error),

    /// Request data could not be encoded.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[display("Invalid base URL: {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// Description of why the base URL is invalid.
        error: String,
    },
}

impl From<reqwest::Error> for ApiClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(TransportError::from(value))
    }
}

impl ApiClientError {
    /// Returns the HTTP status when the server rejected the call.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(error) => Some(error.status()),
            _ => None,
        }
    }
}

/// A required parameter was `None` when the call was issued.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
#[display(
    "Required parameter requestParameters.{parameter} was null or undefined when calling {operation}."
)]
pub struct RequiredError {
    parameter: String,
    operation: String,
}

impl RequiredError {
    /// Creates the error for `parameter` missing when calling `operation`.
    pub fn new(parameter: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            operation: operation.into(),
        }
    }

    /// The name of the missing parameter.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// The name of the operation being called.
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

/// The server completed the exchange with a non-success status.
///
/// The raw body is kept so callers can inspect the server's reason,
/// for example a FastAPI `{"detail": ...}` payload.
#[derive(Clone, derive_more::Debug, derive_more::Error)]
pub struct ApiError {
    status: StatusCode,
    headers: HeaderMap,
    #[debug("{} bytes", raw_body.len())]
    raw_body: Bytes,
}

impl ApiError {
    /// Creates an API error from the response parts.
    pub fn new(status: StatusCode, headers: HeaderMap, raw_body: Bytes) -> Self {
        Self {
            status,
            headers,
            raw_body,
        }
    }

    /// The HTTP status returned by the server.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn raw_body(&self) -> &Bytes {
        &self.raw_body
    }

    /// The response body as text, lossy on invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.raw_body).into_owned()
    }

    /// Decodes the error body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the body is not a valid `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        DecodeError::parse_json(&self.raw_body)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.body_text();
        if body.len() > BODY_MAX_LENGTH {
            let cut = (0..=BODY_MAX_LENGTH)
                .rev()
                .find(|idx| body.is_char_boundary(*idx))
                .unwrap_or_default();
            let head = body.get(..cut).unwrap_or_default();
            write!(f, "HTTP status {}: {head}... (truncated)", self.status)
        } else {
            write!(f, "HTTP status {}: {body}", self.status)
        }
    }
}

/// The response body could not be turned into the expected value.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[display("Invalid JSON body: {error}\n{body}")]
    Syntax {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The body that failed to parse.
        body: String,
    },

    /// The JSON document does not match the expected shape.
    #[display("Failed to map JSON at '{path}': {error}")]
    Mapping {
        /// Location of the mismatch inside the document.
        path: String,
        /// The underlying mapping error.
        error: serde_json::Error,
    },

    /// The body is not valid UTF-8 text.
    #[display("Invalid UTF-8 body: {_0}")]
    Utf8(std::str::Utf8Error),

    /// A custom mapper rejected the value.
    #[display("Mapping error: {message}")]
    Custom {
        /// Description of the failure.
        message: String,
    },
}

impl DecodeError {
    /// Parses `body` as JSON then maps it into `T`, locating mapping failures.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Syntax`] if the body is not JSON, [`DecodeError::Mapping`]
    /// if it does not fit `T`.
    pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Self> {
        let value = serde_json::from_slice::<serde_json::Value>(body).map_err(|error| {
            Self::Syntax {
                error,
                body: String::from_utf8_lossy(body).into_owned(),
            }
        })?;
        Self::map_value(value)
    }

    /// Maps an already parsed JSON value into `T`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Mapping`] with the JSON path of the first mismatch.
    pub fn map_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Self> {
        serde_path_to_error::deserialize(value).map_err(|err| {
            let path = err.path().to_string();
            Self::Mapping {
                path,
                error: err.into_inner(),
            }
        })
    }

    /// Creates a custom mapping error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

/// A transport-level failure, surfaced unchanged from the transport.
pub struct TransportError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl TransportError {
    /// Wraps any transport error.
    pub fn new(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self(error.into())
    }

    /// Returns the wrapped error if it is of type `E`.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Whether the transport reports a timeout.
    pub fn is_timeout(&self) -> bool {
        self.downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_timeout)
    }

    /// Whether the transport failed to connect.
    pub fn is_connect(&self) -> bool {
        self.downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_connect)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network error: {}", self.0)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}
