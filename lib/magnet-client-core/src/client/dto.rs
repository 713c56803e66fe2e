use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::DecodeError;

/// An optional DTO field that tells a missing key from an explicit `null`.
///
/// Use it with
/// `#[serde(default, skip_serializing_if = "Maybe::is_absent")]` so that:
/// - a missing key decodes to [`Maybe::Absent`] and is never emitted,
/// - `null` decodes to [`Maybe::Null`] and is emitted as `null`,
/// - any other value decodes to [`Maybe::Value`].
///
/// # Example
///
/// ```rust
/// use magnet_client_core::Maybe;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Profile {
///     #[serde(default, skip_serializing_if = "Maybe::is_absent")]
///     full_name: Maybe<String>,
/// }
///
/// let absent: Profile = serde_json::from_str("{}")?;
/// let null: Profile = serde_json::from_str(r#"{"full_name": null}"#)?;
///
/// assert_eq!(absent.full_name, Maybe::Absent);
/// assert_eq!(null.full_name, Maybe::Null);
/// assert_eq!(serde_json::to_string(&absent)?, "{}");
/// assert_eq!(serde_json::to_string(&null)?, r#"{"full_name":null}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    /// The key is missing.
    #[default]
    Absent,
    /// The key is present with a `null` value.
    Null,
    /// The key is present with a value.
    Value(T),
}

impl<T> Maybe<T> {
    /// Whether the key is missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the key is explicitly `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Converts into an `Option`, losing the absent/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Maps the value, keeping absence and nullity.
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Null => Maybe::Null,
            Self::Value(value) => Maybe::Value(op(value)),
        }
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `None` is treated as a missing key.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Value)
    }
}

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}

/// Pure mappings between a DTO and its untyped JSON form.
///
/// Implemented for every serde type. `from_json` propagates `null` as
/// `None` instead of failing, so optional nested DTOs need no special case.
pub trait Dto: Serialize + DeserializeOwned {
    /// Maps an untyped JSON value into the DTO.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Mapping`] when the value does not have the DTO shape,
    /// including a missing required field.
    fn from_json(value: Value) -> Result<Option<Self>, DecodeError> {
        if value.is_null() {
            return Ok(None);
        }
        DecodeError::map_value(value).map(Some)
    }

    /// Maps the DTO into untyped JSON.
    ///
    /// # Errors
    ///
    /// Fails only for maps whose keys are not strings.
    fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<T> Dto for T where T: Serialize + DeserializeOwned {}
