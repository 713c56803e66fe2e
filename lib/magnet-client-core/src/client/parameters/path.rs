use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};
use tracing::warn;

use super::ParamValue;
use crate::client::ApiClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
#[allow(clippy::expect_used)]
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Characters escaped in a URI component.
///
/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the unreserved set of
/// JavaScript's `encodeURIComponent`.
pub(in crate::client) const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(in crate::client) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A path template with its parameter values.
///
/// Placeholders use the `{name}` syntax; the same placeholder may appear
/// several times. Values are percent-encoded on resolution.
///
/// # Examples
///
/// ```rust
/// use magnet_client_core::CallPath;
///
/// let path = CallPath::from("/users/{user_id}").add_param("user_id", 42);
/// assert_eq!(path.resolve()?, "/users/42");
///
/// let path = CallPath::from("/scaffold/{id}").add_param("id", "a b");
/// assert_eq!(path.resolve()?, "/scaffold/a%20b");
/// # Ok::<(), magnet_client_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display("{template}")]
pub struct CallPath {
    template: String,
    args: IndexMap<String, ParamValue>,
}

impl CallPath {
    /// Adds a path parameter; an absent value leaves the placeholder unresolved.
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let value = value.into();
        if value.is_present() {
            self.args.insert(name.into(), value);
        }
        self
    }

    /// The path template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether a present value was supplied for `name`.
    pub fn has_param(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// # Errors
    ///
    /// [`ApiClientError::PathUnresolved`] when a placeholder has no value.
    pub fn resolve(&self) -> Result<String, ApiClientError> {
        let mut missings = Vec::new();
        let mut used = Vec::new();

        let path = RE.replace_all(&self.template, |caps: &Captures| {
            let name = caps.name("name").map_or("", |found| found.as_str());
            match self.args.get(name).and_then(ParamValue::to_text) {
                Some(text) => {
                    used.push(name.to_string());
                    encode_component(&text)
                }
                None => {
                    if !missings.iter().any(|missing| missing == name) {
                        missings.push(name.to_string());
                    }
                    caps.get(0)
                        .map_or_else(String::new, |all| all.as_str().to_string())
                }
            }
        });

        for name in self.args.keys().filter(|name| !used.contains(name)) {
            warn!(?name, path = %self.template, "argument name not found");
        }

        if !missings.is_empty() {
            return Err(ApiClientError::PathUnresolved {
                path: self.template.clone(),
                missings,
            });
        }

        Ok(path.into_owned())
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(value: String) -> Self {
        Self {
            template: value,
            args: IndexMap::new(),
        }
    }
}
