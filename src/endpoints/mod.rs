//! Endpoint operations
//!
//! Each file adds the operations for one resource group as inherent methods
//! on [`Sonarr`](crate::Sonarr). Paths are relative to the client's base
//! address.
mod calendar;
mod disk_space;
mod episode;
mod episode_file;
mod queue;
mod series;
mod system;
mod tag;

const CALENDAR_ENDPOINT: &str = "calendar";
const DISK_SPACE_ENDPOINT: &str = "diskspace";
const EPISODE_ENDPOINT: &str = "episode";
const EPISODE_FILE_ENDPOINT: &str = "episodefile";
const QUEUE_ENDPOINT: &str = "queue";
const SERIES_ENDPOINT: &str = "series";
const SYSTEM_STATUS_ENDPOINT: &str = "system/status";
const TAG_ENDPOINT: &str = "tag";

/// Path of a single item below a collection endpoint, e.g. `series/5`.
fn item_path(endpoint: &str, id: i64) -> String {
    format!("{}/{}", endpoint, id)
}
