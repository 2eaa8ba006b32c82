use serde::{Deserialize, Serialize};

/// Quality of a release or a file on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quality {
    #[serde(deserialize_with = "super::null_as_default")]
    pub quality: QualityDefinition,
    #[serde(deserialize_with = "super::null_as_default")]
    pub revision: Revision,
    #[serde(deserialize_with = "super::null_as_default")]
    pub proper: bool,
}

/// A named quality level, e.g. "HDTV-720p".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityDefinition {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
}

/// Release revision; bumped for PROPER and REAL releases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision {
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub real: i32,
}
