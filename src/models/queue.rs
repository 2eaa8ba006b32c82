use super::{Episode, Quality, Series};
use serde::{Deserialize, Serialize};

/// A download the server is currently tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Queue {
    #[serde(deserialize_with = "super::null_as_default")]
    pub series: Series,
    #[serde(deserialize_with = "super::null_as_default")]
    pub episode: Episode,
    #[serde(deserialize_with = "super::null_as_default")]
    pub quality: Quality,
    /// Total size in bytes
    #[serde(deserialize_with = "super::null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    /// Bytes still to be downloaded
    #[serde(rename = "sizeLeft", deserialize_with = "super::null_as_default")]
    pub size_left: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(rename = "trackedDownloadStatus", deserialize_with = "super::null_as_default")]
    pub tracked_download_status: String,
    #[serde(rename = "statusMessages", deserialize_with = "super::null_as_default")]
    pub status_messages: Vec<StatusMessage>,
    #[serde(rename = "downloadId", deserialize_with = "super::null_as_default")]
    pub download_id: String,
    /// "usenet" or "torrent"
    #[serde(deserialize_with = "super::null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
}

/// Warnings the download client reported for a queue item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessage {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub messages: Vec<String>,
}
