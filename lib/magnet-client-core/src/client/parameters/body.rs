use bytes::Bytes;
use headers::ContentType;
use serde::Serialize;

use super::ParamMap;
use crate::client::ApiClientError;

/// Represents the body of an HTTP request with its content type.
///
/// `CallBody` supports JSON, form-encoded, and raw payloads. The content
/// type is sent along with the body.
#[derive(Clone, derive_more::Debug)]
pub struct CallBody {
    content_type: ContentType,
    #[debug("{} bytes", data.len())]
    data: Bytes,
}

impl CallBody {
    /// Creates a JSON body (`application/json`) from a serializable value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use magnet_client_core::CallBody;
    /// # use serde::Serialize;
    /// #[derive(Serialize)]
    /// struct ModifyPassword {
    ///     password: String,
    /// }
    ///
    /// let body = CallBody::json(&ModifyPassword { password: "s3cret".into() })?;
    /// assert_eq!(body.content_type().to_string(), "application/json");
    /// # Ok::<(), magnet_client_core::ApiClientError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized as JSON.
    pub fn json<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(value)?;
        Ok(Self {
            content_type: ContentType::json(),
            data: Bytes::from(data),
        })
    }

    /// Creates an `application/x-www-form-urlencoded` body from scalar fields.
    ///
    /// Absent fields are omitted.
    pub fn form(fields: &ParamMap) -> Self {
        Self {
            content_type: ContentType::form_url_encoded(),
            data: Bytes::from(fields.to_form_string()),
        }
    }

    /// Creates a body from raw bytes with an explicit content type.
    pub fn raw(data: impl Into<Bytes>, content_type: ContentType) -> Self {
        Self {
            content_type,
            data: data.into(),
        }
    }

    /// The content type sent with the body.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// The encoded payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}
