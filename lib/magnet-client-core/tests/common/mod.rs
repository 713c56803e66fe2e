#![allow(dead_code, missing_docs, clippy::expect_used)]

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::any;
use rstest::fixture;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use magnet_client_core::{ApiClient, Configuration};

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// Echoes the request back as JSON.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": header("authorization"),
        "content_type": header("content-type"),
        "x_client": header("x-client"),
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"})))
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[derive(Debug)]
pub struct EchoServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl EchoServer {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let router = Router::new()
            .route("/echo/{*rest}", any(echo))
            .route("/empty", any(no_content))
            .fallback(not_found);

        info!(%addr, "launching echo server");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server running");
        });

        Ok(Self { addr, handle })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self, token: Option<&str>) -> ApiClient {
        let mut builder = Configuration::builder()
            .with_base_url(self.base_url())
            .with_default_header("X-Client", "magnet-tests");
        if let Some(token) = token {
            builder = builder.with_access_token(token);
        }
        ApiClient::new(builder.build().expect("valid configuration"))
    }
}

impl Drop for EchoServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[fixture]
pub async fn server() -> EchoServer {
    init_tracing();
    match EchoServer::start().await {
        Ok(server) => server,
        Err(error) => {
            panic!("fail to start echo server: {error:?}");
        }
    }
}
