use serde::{Deserialize, Serialize};

/// A label that can be applied to series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "super::null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
}
