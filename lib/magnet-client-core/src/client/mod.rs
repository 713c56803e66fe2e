use std::sync::Arc;

mod auth;
pub use self::auth::{AccessToken, SecureString, SecurityRequirement, TokenResolver};

mod call;
pub use self::call::{ApiCall, execute};

mod config;
pub use self::config::{ClientSettings, Configuration, ConfigurationBuilder};

mod descriptor;
pub use self::descriptor::{HttpMethod, Operation, RequestDescriptor, ResponseKind};

mod dto;
pub use self::dto::{Dto, Maybe};

mod error;
pub use self::error::{ApiClientError, ApiError, DecodeError, RequiredError, TransportError};

mod parameters;
pub use self::parameters::{CallBody, CallHeaders, CallPath, ParamMap, ParamValue};

mod response;
pub use self::response::{
    ApiResponse, Decoder, JsonDecoder, RawResponse, TextDecoder, VoidDecoder,
};

mod transport;
#[cfg(any(test, feature = "testing"))]
pub use self::transport::{RecordedRequest, RecordingTransport};
pub use self::transport::{ReqwestTransport, Transport, TransportFuture};

/// HTTP client for the magnet API.
///
/// An `ApiClient` pairs an immutable [`Configuration`] with a [`Transport`].
/// Both are shared behind an `Arc`, so cloning a client is cheap and clones
/// can issue calls concurrently. There is no ordering between concurrent
/// calls.
///
/// # Example
///
/// ```rust,no_run
/// use magnet_client_core::{
///     ApiClient, Configuration, HttpMethod, JsonDecoder, RequestDescriptor,
/// };
///
/// # async fn example() -> Result<(), magnet_client_core::ApiClientError> {
/// let configuration = Configuration::builder()
///     .with_base_url("http://127.0.0.1:8000")
///     .build()?;
/// let client = ApiClient::new(configuration);
///
/// let descriptor = RequestDescriptor::new(HttpMethod::Get, "/");
/// let response = client.call(descriptor, JsonDecoder::<String>::new()).await?;
/// let greeting = response.value()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    configuration: Arc<Configuration>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client using the default [`ReqwestTransport`].
    pub fn new(configuration: Configuration) -> Self {
        Self::with_transport(configuration, ReqwestTransport::default())
    }

    /// Creates a client using a custom transport.
    pub fn with_transport(configuration: Configuration, transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(configuration), Arc::new(transport))
    }

    /// Creates a client from already shared parts.
    pub fn from_shared(configuration: Arc<Configuration>, transport: Arc<dyn Transport>) -> Self {
        Self {
            configuration,
            transport,
        }
    }

    /// The client configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Prepares a call; await it to send the request.
    pub fn request(&self, descriptor: RequestDescriptor) -> ApiCall {
        ApiCall::new(
            Arc::clone(&self.configuration),
            Arc::clone(&self.transport),
            descriptor,
        )
    }

    /// Sends a call and pairs the response with `decoder`.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::Required`] if a required parameter is missing,
    /// - [`ApiClientError::Api`] on a non-2xx status,
    /// - [`ApiClientError::Network`] on a transport failure.
    ///
    /// Decoding failures are reported by [`ApiResponse::value`].
    pub async fn call<D>(
        &self,
        descriptor: RequestDescriptor,
        decoder: D,
    ) -> Result<ApiResponse<D>, ApiClientError>
    where
        D: Decoder,
    {
        self.request(descriptor).decode(decoder).await
    }
}
