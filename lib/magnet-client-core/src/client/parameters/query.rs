use indexmap::IndexMap;
use percent_encoding::{AsciiSet, utf8_percent_encode};

use super::ParamValue;
use super::path::COMPONENT;

/// [`COMPONENT`] plus `'`, which the URL parser escapes in queries of http(s) URLs.
const QUERY_COMPONENT: &AsciiSet = &COMPONENT.add(b'\'');

fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// An ordered mapping from parameter name to scalar value.
///
/// Keys are unique: inserting an existing key replaces its value and keeps
/// its original position. Absent values are kept in the map but never
/// encoded.
///
/// # Examples
///
/// ```rust
/// use magnet_client_core::ParamMap;
///
/// let query = ParamMap::new()
///     .add_param("from", 0)
///     .add_param("limit", None::<i64>)
///     .add_param("filter_module", "bot runner");
///
/// assert_eq!(query.to_query_string(), "from=0&filter_module=bot%20runner");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap {
    params: IndexMap<String, ParamValue>,
}

impl ParamMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the same name.
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(name.into(), value.into());
    }

    /// Whether a present value exists for `name`.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.get(name).is_some_and(ParamValue::is_present)
    }

    /// Whether there is nothing to encode.
    pub fn is_empty(&self) -> bool {
        !self.params.values().any(ParamValue::is_present)
    }

    /// Iterates over the present parameters as `(name, text)` pairs, in insertion order.
    pub fn iter_present(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.params
            .iter()
            .filter_map(|(name, value)| value.to_text().map(|text| (name.as_str(), text)))
    }

    /// Encodes the present parameters as a query string (without the leading `?`).
    ///
    /// Names and values are percent-encoded as URI components, so a space is
    /// `%20`. A `'` is also escaped as `%27`, the form it takes on the wire.
    pub fn to_query_string(&self) -> String {
        self.iter_present()
            .map(|(name, text)| {
                let name = encode_query_component(name);
                let text = encode_query_component(&text);
                format!("{name}={text}")
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Encodes the present parameters as an `application/x-www-form-urlencoded` body.
    pub fn to_form_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter_present())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMap
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut result = Self::new();
        for (name, value) in iter {
            result.insert(name, value);
        }
        result
    }
}
