//! Series documents returned by the `series` endpoints.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A show tracked by the Sonarr server.
///
/// Obtain one from `get_series` or `get_all_series`, modify it and send it
/// back with `update_series`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(rename = "alternateTitles", deserialize_with = "super::null_as_default")]
    pub alternate_titles: Vec<AlternateTitle>,
    #[serde(rename = "sortTitle", deserialize_with = "super::null_as_default")]
    pub sort_title: String,
    #[serde(rename = "seasonCount", deserialize_with = "super::null_as_default")]
    pub season_count: i32,
    #[serde(rename = "totalEpisodeCount", deserialize_with = "super::null_as_default")]
    pub total_episode_count: i32,
    #[serde(rename = "episodeCount", deserialize_with = "super::null_as_default")]
    pub episode_count: i32,
    #[serde(rename = "episodeFileCount", deserialize_with = "super::null_as_default")]
    pub episode_file_count: i32,
    /// Bytes used by all episode files of the series
    #[serde(rename = "sizeOnDisk", deserialize_with = "super::null_as_default")]
    pub size_on_disk: i64,
    /// Airing status, e.g. "continuing" or "ended"
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub overview: String,
    #[serde(rename = "previousAiring")]
    pub previous_airing: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub network: String,
    #[serde(rename = "airTime", deserialize_with = "super::null_as_default")]
    pub air_time: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub seasons: Vec<Season>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub year: i32,
    /// Root folder of the series on the server
    #[serde(deserialize_with = "super::null_as_default")]
    pub path: String,
    #[serde(rename = "profileId", deserialize_with = "super::null_as_default")]
    pub profile_id: i64,
    #[serde(rename = "seasonFolder", deserialize_with = "super::null_as_default")]
    pub season_folder: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub monitored: bool,
    #[serde(rename = "useSceneNumbering", deserialize_with = "super::null_as_default")]
    pub use_scene_numbering: bool,
    /// Episode runtime in minutes
    #[serde(deserialize_with = "super::null_as_default")]
    pub runtime: i32,
    #[serde(rename = "tvdbId", deserialize_with = "super::null_as_default")]
    pub tvdb_id: i64,
    #[serde(rename = "tvRageId", deserialize_with = "super::null_as_default")]
    pub tv_rage_id: i64,
    #[serde(rename = "tvMazeId", deserialize_with = "super::null_as_default")]
    pub tv_maze_id: i64,
    #[serde(rename = "firstAired")]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(rename = "lastInfoSync")]
    pub last_info_sync: Option<DateTime<Utc>>,
    /// "standard", "daily" or "anime"
    #[serde(rename = "seriesType", deserialize_with = "super::null_as_default")]
    pub series_type: String,
    #[serde(rename = "cleanTitle", deserialize_with = "super::null_as_default")]
    pub clean_title: String,
    #[serde(rename = "imdbId", deserialize_with = "super::null_as_default")]
    pub imdb_id: String,
    #[serde(rename = "titleSlug", deserialize_with = "super::null_as_default")]
    pub title_slug: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub certification: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub genres: Vec<String>,
    /// Ids of the [`Tag`](crate::Tag)s applied to this series
    #[serde(deserialize_with = "super::null_as_default")]
    pub tags: Vec<i64>,
    pub added: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub ratings: Ratings,
    #[serde(rename = "qualityProfileId", deserialize_with = "super::null_as_default")]
    pub quality_profile_id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
}

/// An alternative (often scene) title for a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternateTitle {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(rename = "seasonNumber", deserialize_with = "super::null_as_default")]
    pub season_number: i32,
}

/// Artwork attached to a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// "poster", "banner" or "fanart"
    #[serde(rename = "coverType", deserialize_with = "super::null_as_default")]
    pub cover_type: String,
}

/// A season of a series and whether it is monitored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
    #[serde(rename = "seasonNumber", deserialize_with = "super::null_as_default")]
    pub season_number: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub monitored: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub statistics: SeasonStatistics,
}

/// Per-season counters computed by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonStatistics {
    #[serde(rename = "previousAiring")]
    pub previous_airing: Option<DateTime<Utc>>,
    #[serde(rename = "episodeFileCount", deserialize_with = "super::null_as_default")]
    pub episode_file_count: i32,
    #[serde(rename = "episodeCount", deserialize_with = "super::null_as_default")]
    pub episode_count: i32,
    #[serde(rename = "totalEpisodeCount", deserialize_with = "super::null_as_default")]
    pub total_episode_count: i32,
    #[serde(rename = "sizeOnDisk", deserialize_with = "super::null_as_default")]
    pub size_on_disk: i64,
    #[serde(rename = "percentOfEpisodes", deserialize_with = "super::null_as_default")]
    pub percent_of_episodes: i32,
}

/// Community rating of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ratings {
    #[serde(deserialize_with = "super::null_as_default")]
    pub votes: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub value: f32,
}
