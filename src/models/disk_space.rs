use serde::{Deserialize, Serialize};

/// Capacity of a volume mounted on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskSpace {
    #[serde(deserialize_with = "super::null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub label: String,
    /// Free bytes
    #[serde(rename = "freeSpace", deserialize_with = "super::null_as_default")]
    pub free_space: i64,
    /// Total bytes
    #[serde(rename = "totalSpace", deserialize_with = "super::null_as_default")]
    pub total_space: i64,
}
