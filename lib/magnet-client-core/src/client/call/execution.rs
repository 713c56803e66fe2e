use std::future::{Future, IntoFuture};
use std::pin::Pin;

use bytes::Bytes;
use headers::HeaderMapExt;
use http::header::AUTHORIZATION;
use tracing::debug;

use super::ApiCall;
use crate::client::response::{ApiResponse, Decoder, RawResponse};
use crate::client::transport::Transport;
use crate::client::{ApiClientError, ApiError, Configuration, RequestDescriptor};

/// Executes one call: exactly one transport attempt, no retry.
///
/// Required parameters are checked and the request fully built before the
/// transport is involved, so those failures never reach the network.
/// A non-2xx status becomes an [`ApiError`] carrying the status and raw body;
/// a transport failure is surfaced unchanged as
/// [`ApiClientError::Network`].
///
/// # Errors
///
/// See [`ApiClientError`] for the possible failures.
pub async fn execute(
    configuration: &Configuration,
    transport: &dyn Transport,
    descriptor: &RequestDescriptor,
) -> Result<RawResponse, ApiClientError> {
    descriptor.check_required()?;
    let request = build_request(configuration, descriptor)?;

    debug!(
        operation = descriptor.operation(),
        method = %request.method(),
        uri = %request.uri(),
        "sending..."
    );
    let response = RawResponse::from(transport.send(request).await?);
    debug!(
        operation = descriptor.operation(),
        status = %response.status(),
        "...receiving"
    );

    if !response.status().is_success() {
        let (status, headers, body) = response.into_parts();
        return Err(ApiError::new(status, headers, body).into());
    }

    Ok(response)
}

pub(in crate::client) fn build_request(
    configuration: &Configuration,
    descriptor: &RequestDescriptor,
) -> Result<http::Request<Bytes>, ApiClientError> {
    let path = descriptor.path().resolve()?;
    let url = configuration.build_url(&path, descriptor.query())?;

    let mut headers = configuration.default_headers().clone();
    headers.extend(descriptor.headers().to_header_map()?);

    let body = descriptor.to_body();
    if let Some(body) = &body {
        headers.typed_insert(body.content_type().clone());
    }

    // only secured operations carry the token
    if let (Some(requirement), Some(token)) =
        (descriptor.security(), configuration.access_token())
    {
        headers.insert(AUTHORIZATION, token.to_header_value(requirement)?);
    }

    let data = body.map(|body| body.data().clone()).unwrap_or_default();
    let mut request = http::Request::builder()
        .method(http::Method::from(descriptor.method()))
        .uri(url.as_str())
        .body(data)?;
    *request.headers_mut() = headers;

    Ok(request)
}

impl ApiCall {
    async fn exchange(self) -> Result<RawResponse, ApiClientError> {
        let Self {
            configuration,
            transport,
            descriptor,
            cancellation,
        } = self;

        let call = execute(&configuration, transport.as_ref(), &descriptor);
        let Some(cancellation) = cancellation else {
            return call.await;
        };

        tokio::select! {
            biased;
            () = cancellation.cancelled() => {
                debug!(operation = descriptor.operation(), "cancelled");
                Err(ApiClientError::Cancelled)
            }
            result = call => result,
        }
    }

    /// Executes the call and wraps the response with `decoder`.
    ///
    /// # Errors
    ///
    /// Fails like [`execute`]; decoding errors are only reported by
    /// [`ApiResponse::value`].
    ///
    /// # Panics
    ///
    /// In debug builds, when the call was built from an
    /// [`Operation`](crate::Operation) declaring another
    /// [`ResponseKind`](crate::ResponseKind) than the decoder's.
    pub async fn decode<D>(self, decoder: D) -> Result<ApiResponse<D>, ApiClientError>
    where
        D: Decoder,
    {
        if let Some(expected) = self.descriptor.response() {
            debug_assert_eq!(
                expected,
                decoder.kind(),
                "{} declares {expected:?} responses",
                self.descriptor.operation()
            );
        }
        let raw = self.exchange().await?;
        Ok(ApiResponse::new(raw, decoder))
    }
}

impl IntoFuture for ApiCall {
    type Output = Result<RawResponse, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
