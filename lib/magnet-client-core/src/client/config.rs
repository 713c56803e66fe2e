use http::HeaderMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use super::parameters::{CallHeaders, ParamMap, ParamValue};
use super::{AccessToken, ApiClientError, SecureString};

const DEFAULT_BASE_URL: &str = "http://localhost";

/// Immutable settings shared by every call of a client.
///
/// A configuration holds the base URL, headers sent with every request and
/// an optional [`AccessToken`]. It cannot be changed once built; share it
/// with an `Arc` (the [`ApiClient`](crate::ApiClient) does).
///
/// # Example
///
/// ```rust
/// use magnet_client_core::{AccessToken, Configuration};
///
/// let configuration = Configuration::builder()
///     .with_base_url("http://127.0.0.1:8000")
///     .with_default_header("X-Client", "magnet-rs")
///     .with_access_token("tok123")
///     .build()?;
///
/// assert_eq!(configuration.base_url().as_str(), "http://127.0.0.1:8000/");
/// # Ok::<(), magnet_client_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    base_url: Url,
    default_headers: HeaderMap,
    access_token: Option<AccessToken>,
}

impl Configuration {
    /// Creates a builder with the defaults: `http://localhost`, no extra
    /// headers and no authentication.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// The base URL every path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// The token used for secured operations, if any.
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Joins the base URL and `path`, then appends the encoded `query` as is.
    pub(in crate::client) fn build_url(
        &self,
        path: &str,
        query: &ParamMap,
    ) -> Result<Url, ApiClientError> {
        let url = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !query.is_empty() {
            url.set_query(Some(&query.to_query_string()));
        }

        Ok(url)
    }
}

/// Builder for [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    base_url: String,
    default_headers: CallHeaders,
    access_token: Option<AccessToken>,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: CallHeaders::default(),
            access_token: None,
        }
    }
}

impl ConfigurationBuilder {
    /// Sets the base URL, e.g. `https://magnet.example.com/api`.
    ///
    /// Validated by [`build`](Self::build).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Adds a header sent with every request.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.default_headers = self.default_headers.add_header(name, value);
        self
    }

    /// Sets the token used for secured operations.
    pub fn with_access_token(mut self, access_token: impl Into<AccessToken>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Sets a resolver computing the token for each secured call.
    pub fn with_token_resolver<F>(self, resolver: F) -> Self
    where
        F: Fn(&str, &[&str]) -> String + Send + Sync + 'static,
    {
        self.with_access_token(AccessToken::dynamic(resolver))
    }

    /// Builds the immutable configuration.
    ///
    /// # Errors
    ///
    /// Fails if the base URL is not an absolute `http`/`https` URL or if a
    /// default header is not valid HTTP.
    pub fn build(self) -> Result<Configuration, ApiClientError> {
        let Self {
            base_url,
            default_headers,
            access_token,
        } = self;

        let base_url = Url::parse(&base_url).map_err(|err| ApiClientError::InvalidBaseUrl {
            error: format!("'{base_url}': {err}"),
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiClientError::InvalidBaseUrl {
                error: format!("'{base_url}' is not an http(s) base URL"),
            });
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(ApiClientError::InvalidBaseUrl {
                error: format!("'{base_url}' must not have a query or a fragment"),
            });
        }

        let default_headers = default_headers.to_header_map()?;

        Ok(Configuration {
            base_url,
            default_headers,
            access_token,
        })
    }
}

/// Serializable client settings, e.g. loaded from a configuration file.
///
/// ```yaml
/// base_url: https://magnet.example.com
/// default_headers:
///   X-Client: magnet-rs
/// access_token: tok123
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// The base URL, `http://localhost` when missing.
    pub base_url: Option<String>,
    /// Headers sent with every request.
    pub default_headers: IndexMap<String, String>,
    /// A static access token.
    pub access_token: Option<SecureString>,
}

impl ClientSettings {
    /// Parses settings from a YAML document.
    ///
    /// # Errors
    ///
    /// Fails if the document is not valid YAML or does not match the settings shape.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, ApiClientError> {
        serde_saphyr::from_str(yaml).map_err(|err| ApiClientError::Serialization {
            message: format!("Failed to read YAML settings: {err}"),
        })
    }

    /// Turns the settings into a builder, to be refined before building.
    pub fn into_builder(self) -> ConfigurationBuilder {
        let Self {
            base_url,
            default_headers,
            access_token,
        } = self;

        let mut builder = Configuration::builder();
        if let Some(base_url) = base_url {
            builder = builder.with_base_url(base_url);
        }
        for (name, value) in default_headers {
            builder = builder.with_default_header(name, value);
        }
        if let Some(access_token) = access_token {
            builder = builder.with_access_token(access_token);
        }
        builder
    }
}

impl TryFrom<ClientSettings> for Configuration {
    type Error = ApiClientError;

    fn try_from(value: ClientSettings) -> Result<Self, Self::Error> {
        value.into_builder().build()
    }
}
