use super::Series;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An episode that aired or will air within the requested calendar window.
///
/// Carries a snapshot of its [`Series`]. Key casing differs from [`Episode`](crate::Episode)
/// (`episodeFileId`, `airDateUtc`) and is kept as the server sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calendar {
    #[serde(rename = "seriesId", deserialize_with = "super::null_as_default")]
    pub series_id: i64,
    #[serde(rename = "episodeFileId", deserialize_with = "super::null_as_default")]
    pub episode_file_id: i64,
    #[serde(rename = "seasonNumber", deserialize_with = "super::null_as_default")]
    pub season_number: i32,
    #[serde(rename = "episodeNumber", deserialize_with = "super::null_as_default")]
    pub episode_number: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(rename = "airDate", deserialize_with = "super::null_as_default")]
    pub air_date: String,
    #[serde(rename = "airDateUtc")]
    pub air_date_utc: Option<DateTime<Utc>>,
    #[serde(rename = "hasFile", deserialize_with = "super::null_as_default")]
    pub has_file: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub monitored: bool,
    #[serde(rename = "absoluteEpisodeNumber", deserialize_with = "super::null_as_default")]
    pub absolute_episode_number: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub series: Series,
    #[serde(rename = "unverifiedSceneNumbering", deserialize_with = "super::null_as_default")]
    pub unverified_scene_numbering: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_uses_lower_case_id_suffixes() {
        let json = r#"{
            "seriesId": 4,
            "episodeFileId": 9,
            "airDateUtc": "2017-01-26T01:30:00Z",
            "series": {"id": 4, "title": "Bob's Burgers"}
        }"#;
        let entry: Calendar = serde_json::from_str(json).unwrap();
        assert_eq!(entry.episode_file_id, 9);
        assert!(entry.air_date_utc.is_some());
        assert_eq!(entry.series.title, "Bob's Burgers");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["episodeFileId"], 9);
        assert!(value.get("episodeFileID").is_none());
    }
}
