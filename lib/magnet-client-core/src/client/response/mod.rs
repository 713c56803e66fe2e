use std::fmt;
use std::sync::OnceLock;

use super::DecodeError;

mod decoder;
pub use self::decoder::{Decoder, JsonDecoder, TextDecoder, VoidDecoder};

mod raw;
pub use self::raw::RawResponse;

/// A successful response paired with the decoder of its operation.
///
/// [`value`](Self::value) decodes lazily on first use and caches the value;
/// later calls return the same value. A decoding failure is returned to the
/// caller and not cached, decoding again gives the identical failure.
pub struct ApiResponse<D>
where
    D: Decoder,
{
    raw: RawResponse,
    decoder: D,
    value: OnceLock<D::Output>,
}

impl<D> ApiResponse<D>
where
    D: Decoder,
{
    /// Wraps a raw response with a decoder.
    pub fn new(raw: RawResponse, decoder: D) -> Self {
        Self {
            raw,
            decoder,
            value: OnceLock::new(),
        }
    }

    /// The undecoded response.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// Whether the value has already been decoded.
    pub fn is_decoded(&self) -> bool {
        self.value.get().is_some()
    }

    /// Decodes the response, once.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the body does not match the expected shape.
    pub fn value(&self) -> Result<&D::Output, DecodeError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let decoded = self.decoder.decode(&self.raw)?;
        Ok(self.value.get_or_init(|| decoded))
    }

    /// Consumes the wrapper and returns the decoded value.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the body does not match the expected shape.
    pub fn into_value(self) -> Result<D::Output, DecodeError> {
        let Self {
            raw,
            decoder,
            value,
        } = self;
        match value.into_inner() {
            Some(value) => Ok(value),
            None => decoder.decode(&raw),
        }
    }
}

impl<D> fmt::Debug for ApiResponse<D>
where
    D: Decoder + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("raw", &self.raw)
            .field("decoder", &self.decoder)
            .field("decoded", &self.is_decoded())
            .finish()
    }
}
