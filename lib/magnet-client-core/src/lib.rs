//! # magnet-client-core
//!
//! Runtime of a typed, declarative HTTP client for the magnet API.
//!
//! A call is described by a [`RequestDescriptor`] (method, path template,
//! query, headers, body, required parameters, security requirement),
//! executed once against an immutable [`Configuration`] through a
//! [`Transport`], and decoded lazily by a [`Decoder`] into an
//! [`ApiResponse`].
//!
//! ```rust,no_run
//! use magnet_client_core::{
//!     AccessToken, ApiClient, Configuration, HttpMethod, JsonDecoder, RequestDescriptor,
//!     SecurityRequirement,
//! };
//!
//! # async fn example() -> Result<(), magnet_client_core::ApiClientError> {
//! const BEARER: SecurityRequirement = SecurityRequirement::new("OAuth2PasswordBearer", &[]);
//!
//! let configuration = Configuration::builder()
//!     .with_base_url("http://127.0.0.1:8000")
//!     .with_access_token("tok123")
//!     .build()?;
//! let client = ApiClient::new(configuration);
//!
//! let descriptor = RequestDescriptor::new(HttpMethod::Get, "/users/{user_id}")
//!     .with_required("user_id")
//!     .with_security(BEARER)
//!     .path_param("user_id", 42);
//! let response = client
//!     .call(descriptor, JsonDecoder::<serde_json::Value>::new())
//!     .await?;
//! let user = response.value()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure is an [`ApiClientError`], and callers branch on its kind:
//!
//! - [`ApiClientError::Required`]: a required parameter was not supplied, no I/O happened
//! - [`ApiClientError::Api`]: the server answered with a non-2xx status
//! - [`ApiClientError::Decode`]: a success body does not have the expected shape
//! - [`ApiClientError::Network`]: the transport failed
//! - [`ApiClientError::Cancelled`]: the caller cancelled the call
//!
//! Nothing is retried.
//!
//! ## Features
//!
//! - `yaml`: read [`ClientSettings`] from YAML
//! - `testing`: expose [`RecordingTransport`], an in-memory transport spy

mod client;

pub use self::client::{
    AccessToken, ApiCall, ApiClient, ApiClientError, ApiError, ApiResponse, CallBody, CallHeaders,
    CallPath, ClientSettings, Configuration, ConfigurationBuilder, DecodeError, Decoder, Dto,
    HttpMethod, JsonDecoder, Maybe, Operation, ParamMap, ParamValue, RawResponse,
    RequestDescriptor, RequiredError, ResponseKind, ReqwestTransport, SecureString,
    SecurityRequirement, TextDecoder, TokenResolver, Transport, TransportError, TransportFuture,
    VoidDecoder, execute,
};
#[cfg(any(test, feature = "testing"))]
pub use self::client::{RecordedRequest, RecordingTransport};

pub use tokio_util::sync::CancellationToken;
