//! # magnet-client
//!
//! Typed client for the magnet API: one method per endpoint on
//! [`DefaultApi`], the server schemas in [`models`], and the endpoint table
//! in [`operations`].
//!
//! ```rust,no_run
//! use magnet_client::{ApiClient, Configuration, DefaultApi, IndexScaffoldRequest};
//!
//! # async fn example() -> Result<(), magnet_client::ApiClientError> {
//! let configuration = Configuration::builder()
//!     .with_base_url("http://127.0.0.1:8000")
//!     .with_access_token("tok123")
//!     .build()?;
//! let api = DefaultApi::new(ApiClient::new(configuration));
//!
//! let me = api.get_me().await?;
//! let scaffolds = api
//!     .index_scaffold(IndexScaffoldRequest {
//!         limit: Some(20),
//!         ..IndexScaffoldRequest::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Errors are reported as [`ApiClientError`]; a `422` body can be read with
//! [`ApiError::json`] as a [`models::HttpValidationError`].

mod apis;
pub use self::apis::*;

pub mod models;
pub use self::models::LoginForm;
pub mod operations;

pub use magnet_client_core::{
    AccessToken, ApiClient, ApiClientError, ApiError, ApiResponse, CancellationToken,
    ClientSettings, Configuration, ConfigurationBuilder, DecodeError, Maybe, RawResponse,
    RequiredError, SecureString, Transport, TransportError,
};
