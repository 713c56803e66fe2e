use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::RawResponse;
use crate::client::{DecodeError, Dto, ResponseKind};

/// Converts a successful raw response into a typed value.
///
/// Decoding must be pure: the same bytes always give the same result.
pub trait Decoder {
    /// The decoded value.
    type Output;

    /// Decodes the response.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the body does not have the expected shape.
    fn decode(&self, response: &RawResponse) -> Result<Self::Output, DecodeError>;

    /// The kind of body this decoder expects.
    fn kind(&self) -> ResponseKind;
}

/// Decodes the body as UTF-8 text; no content gives an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl Decoder for TextDecoder {
    type Output = String;

    fn decode(&self, response: &RawResponse) -> Result<Self::Output, DecodeError> {
        if response.is_empty() {
            return Ok(String::new());
        }
        response.text().map(str::to_string)
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::Text
    }
}

/// Ignores the body: only the success of the call is observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidDecoder;

impl Decoder for VoidDecoder {
    type Output = ();

    fn decode(&self, _response: &RawResponse) -> Result<Self::Output, DecodeError> {
        Ok(())
    }

    fn kind(&self) -> ResponseKind {
        ResponseKind::Void
    }
}

/// Parses the body as JSON, then applies a mapper to the parsed value.
///
/// [`JsonDecoder::new`] maps with the type's `Deserialize` implementation
/// and reports the JSON path of a mismatch. [`JsonDecoder::dto`] maps with
/// [`Dto::from_json`], so a `null` body decodes to `None`.
///
/// # Example
///
/// ```rust
/// use magnet_client_core::{Decoder, JsonDecoder, RawResponse};
/// use http::{HeaderMap, StatusCode};
///
/// let response = RawResponse::new(StatusCode::OK, HeaderMap::new(), r#"[1, 2, 3]"#.into());
/// let values = JsonDecoder::<Vec<i64>>::new().decode(&response)?;
/// assert_eq!(values, vec![1, 2, 3]);
/// # Ok::<(), magnet_client_core::DecodeError>(())
/// ```
pub struct JsonDecoder<T> {
    mapper: fn(Value) -> Result<T, DecodeError>,
    kind: ResponseKind,
    output: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T>
where
    T: DeserializeOwned,
{
    /// Creates a decoder mapping with `T`'s `Deserialize` implementation.
    pub fn new() -> Self {
        Self::with_mapper(DecodeError::map_value::<T>)
    }
}

impl<T> JsonDecoder<Option<T>>
where
    T: Dto,
{
    /// Creates a decoder mapping with [`Dto::from_json`]; a `null` body gives `None`.
    pub fn dto() -> Self {
        Self {
            mapper: T::from_json,
            kind: ResponseKind::Dto,
            output: PhantomData,
        }
    }
}

impl<T> JsonDecoder<T> {
    /// Creates a decoder with a custom mapper.
    pub const fn with_mapper(mapper: fn(Value) -> Result<T, DecodeError>) -> Self {
        Self {
            mapper,
            kind: ResponseKind::Json,
            output: PhantomData,
        }
    }
}

impl<T> Decoder for JsonDecoder<T> {
    type Output = T;

    fn decode(&self, response: &RawResponse) -> Result<Self::Output, DecodeError> {
        let value = serde_json::from_slice::<Value>(response.body()).map_err(|error| {
            DecodeError::Syntax {
                error,
                body: String::from_utf8_lossy(response.body()).into_owned(),
            }
        })?;
        (self.mapper)(value)
    }

    fn kind(&self) -> ResponseKind {
        self.kind
    }
}

impl<T> Default for JsonDecoder<T>
where
    T: DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonDecoder<T> {}

impl<T> fmt::Debug for JsonDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDecoder")
            .field("output", &std::any::type_name::<T>())
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
