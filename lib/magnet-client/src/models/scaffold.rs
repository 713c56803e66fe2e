use chrono::{DateTime, FixedOffset, NaiveDateTime};
use magnet_client_core::Maybe;
use serde::{Deserialize, Serialize};

/// A scaffold record to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DummyCreate {
    /// Unique name.
    pub name: String,
    /// A timestamp without offset.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub date_naive: Maybe<NaiveDateTime>,
    /// A timestamp with offset.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub date_aware: Maybe<DateTime<FixedOffset>>,
}

impl DummyCreate {
    /// Creates a record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_naive: Maybe::Absent,
            date_aware: Maybe::Absent,
        }
    }
}

/// A partial update of a scaffold record; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DummyPatch {
    /// New name.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub name: Maybe<String>,
    /// New timestamp without offset, `null` clears it.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub date_naive: Maybe<NaiveDateTime>,
    /// New timestamp with offset, `null` clears it.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub date_aware: Maybe<DateTime<FixedOffset>>,
}
