use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::transport::Transport;
use super::{Configuration, RequestDescriptor};

mod execution;
pub use self::execution::execute;

/// A call ready to be sent.
///
/// Awaiting an `ApiCall` performs the request and yields the
/// [`RawResponse`](crate::RawResponse); use [`decode`](Self::decode) to get a
/// typed [`ApiResponse`](crate::ApiResponse) instead.
///
/// # Cancellation
///
/// With [`with_cancellation`](Self::with_cancellation), cancelling the token
/// aborts the in-flight transport call and the call fails with
/// [`ApiClientError::Cancelled`](crate::ApiClientError::Cancelled).
#[derive(derive_more::Debug)]
pub struct ApiCall {
    #[debug(skip)]
    configuration: Arc<Configuration>,
    transport: Arc<dyn Transport>,
    descriptor: RequestDescriptor,
    cancellation: Option<CancellationToken>,
}

impl ApiCall {
    pub(in crate::client) fn new(
        configuration: Arc<Configuration>,
        transport: Arc<dyn Transport>,
        descriptor: RequestDescriptor,
    ) -> Self {
        Self {
            configuration,
            transport,
            descriptor,
            cancellation: None,
        }
    }

    /// Aborts the call when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The descriptor of the call.
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }
}
