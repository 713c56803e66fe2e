use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `422` body returned when a request fails server-side validation.
///
/// Read it from an [`ApiError`](magnet_client_core::ApiError) with
/// `error.json::<HttpValidationError>()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    /// One entry per invalid input.
    #[serde(default)]
    pub detail: Vec<ValidationError>,
}

/// One invalid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location of the input, e.g. `["query", "limit"]`.
    pub loc: Vec<Value>,
    /// Human readable message.
    pub msg: String,
    /// Error kind.
    #[serde(rename = "type")]
    pub kind: String,
}
