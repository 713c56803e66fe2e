use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{Request, Response};

use super::TransportError;

/// The future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Response<Bytes>, TransportError>> + Send + 'a>>;

/// The HTTP collaborator performing the actual network I/O.
///
/// Given a fully built request it returns the status, headers and body of
/// the response, or a network-level error. Connection reuse and keep-alive
/// belong to the implementation.
pub trait Transport: Debug + Send + Sync {
    /// Sends the request and reads the whole response body.
    fn send(&self, request: Request<Bytes>) -> TransportFuture<'_>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport using the given client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(value: reqwest::Client) -> Self {
        Self::new(value)
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: Request<Bytes>) -> TransportFuture<'_> {
        Box::pin(async move {
            let request = reqwest::Request::try_from(request)?;
            let response = self.client.execute(request).await?;

            let mut builder = Response::builder()
                .status(response.status())
                .version(response.version());
            if let Some(headers) = builder.headers_mut() {
                headers.extend(response.headers().clone());
            }
            let body = response.bytes().await?;

            builder.body(body).map_err(TransportError::new)
        })
    }
}

#[cfg(any(test, feature = "testing"))]
pub use self::recording::{RecordedRequest, RecordingTransport};

#[cfg(any(test, feature = "testing"))]
mod recording {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex, PoisonError};

    use bytes::Bytes;
    use http::header::CONTENT_TYPE;
    use http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode, Uri};

    use super::{Transport, TransportFuture};
    use crate::client::TransportError;

    /// A request captured by [`RecordingTransport`].
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        /// The HTTP method.
        pub method: Method,
        /// The full request URI.
        pub uri: Uri,
        /// The request headers.
        pub headers: HeaderMap,
        /// The request body.
        pub body: Bytes,
    }

    impl RecordedRequest {
        /// The body as text, lossy on invalid UTF-8.
        pub fn body_text(&self) -> String {
            String::from_utf8_lossy(&self.body).into_owned()
        }
    }

    #[derive(Debug)]
    enum Canned {
        Response {
            status: StatusCode,
            content_type: Option<&'static str>,
            body: Bytes,
        },
        Failure(String),
        Hang,
    }

    /// In-memory [`Transport`] spy.
    ///
    /// Records every request and answers with queued canned responses, then
    /// with an empty `200 OK` once the queue is drained.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingTransport {
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
        responses: Arc<Mutex<VecDeque<Canned>>>,
    }

    impl RecordingTransport {
        /// Creates a spy answering `200 OK` with an empty body.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response with a raw body.
        #[must_use]
        pub fn respond_with(self, status: u16, body: impl Into<Bytes>) -> Self {
            self.push(Canned::Response {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                content_type: None,
                body: body.into(),
            })
        }

        /// Queues a JSON response.
        #[must_use]
        pub fn respond_with_json(self, status: u16, body: &serde_json::Value) -> Self {
            self.push(Canned::Response {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                content_type: Some("application/json"),
                body: Bytes::from(body.to_string()),
            })
        }

        /// Queues a network failure.
        #[must_use]
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            self.push(Canned::Failure(message.into()))
        }

        /// Queues a call that never completes.
        #[must_use]
        pub fn hang(self) -> Self {
            self.push(Canned::Hang)
        }

        /// The requests received so far.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// The number of requests received so far.
        pub fn call_count(&self) -> usize {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        fn push(self, canned: Canned) -> Self {
            self.responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(canned);
            self
        }

        fn next_canned(&self) -> Option<Canned> {
            self.responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: Request<Bytes>) -> TransportFuture<'_> {
            let (parts, body) = request.into_parts();
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedRequest {
                    method: parts.method,
                    uri: parts.uri,
                    headers: parts.headers,
                    body,
                });
            let canned = self.next_canned();

            Box::pin(async move {
                let (status, content_type, body) = match canned {
                    None => (StatusCode::OK, None, Bytes::new()),
                    Some(Canned::Response {
                        status,
                        content_type,
                        body,
                    }) => (status, content_type, body),
                    Some(Canned::Failure(message)) => return Err(TransportError::new(message)),
                    Some(Canned::Hang) => std::future::pending().await,
                };

                let mut response = Response::builder().status(status);
                if let Some(content_type) = content_type {
                    response = response.header(CONTENT_TYPE, HeaderValue::from_static(content_type));
                }
                response.body(body).map_err(TransportError::new)
            })
        }
    }
}
