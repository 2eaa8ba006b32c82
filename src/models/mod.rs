//! Entity model for the Sonarr REST API.
//!
//! These structures mirror the JSON documents the server sends and accepts.
//! Key names are fixed by the server and kept verbatim, including the places
//! where the server is inconsistent with itself.
mod calendar;
mod disk_space;
mod episode;
mod episode_file;
mod quality;
mod queue;
mod series;
mod system_status;
mod tag;

pub use calendar::Calendar;
pub use disk_space::DiskSpace;
pub use episode::Episode;
pub use episode_file::EpisodeFile;
pub use quality::{Quality, QualityDefinition, Revision};
pub use queue::{Queue, StatusMessage};
pub use series::{AlternateTitle, Image, Ratings, Season, SeasonStatistics, Series};
pub use system_status::SystemStatus;
pub use tag::Tag;

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` as the field type's default value.
///
/// The server sends `null` for text, lists and nested records it has no value
/// for. `#[serde(default)]` only covers keys that are missing entirely.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
