use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One episode of a series.
///
/// The server only honours changes to `monitored` when an episode is sent
/// back through `update_episode`; every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    #[serde(rename = "seriesId", deserialize_with = "super::null_as_default")]
    pub series_id: i64,
    // The episode endpoints spell this key with a capital "ID", unlike calendar entries.
    #[serde(rename = "episodeFileID", deserialize_with = "super::null_as_default")]
    pub episode_file_id: i64,
    #[serde(rename = "seasonNumber", deserialize_with = "super::null_as_default")]
    pub season_number: i32,
    #[serde(rename = "episodeNumber", deserialize_with = "super::null_as_default")]
    pub episode_number: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    /// Local air date as `YYYY-MM-DD`
    #[serde(rename = "airDate", deserialize_with = "super::null_as_default")]
    pub air_date: String,
    #[serde(rename = "airDateUTC")]
    pub air_date_utc: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub overview: String,
    #[serde(rename = "hasFile", deserialize_with = "super::null_as_default")]
    pub has_file: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub monitored: bool,
    #[serde(rename = "unverifiedSceneNumbering", deserialize_with = "super::null_as_default")]
    pub unverified_scene_numbering: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_keeps_upper_case_id_suffixes() {
        let episode = Episode {
            series_id: 1,
            episode_file_id: 12,
            ..Default::default()
        };
        let value = serde_json::to_value(&episode).unwrap();
        assert_eq!(value["episodeFileID"], 12);
        assert!(value.get("episodeFileId").is_none());
        assert!(value.get("airDateUTC").is_some());
    }

    #[test]
    fn test_episode_decodes_server_document() {
        let json = r#"{
            "seriesId": 1,
            "episodeFileID": 0,
            "seasonNumber": 1,
            "episodeNumber": 1,
            "title": "Mise En Scene",
            "airDate": "2015-12-14",
            "airDateUTC": "2015-12-15T03:00:00Z",
            "overview": "A detective searches for a missing woman.",
            "hasFile": false,
            "monitored": false,
            "unverifiedSceneNumbering": false,
            "id": 1
        }"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.title, "Mise En Scene");
        assert_eq!(
            episode.air_date_utc.map(|d| d.to_rfc3339()),
            Some("2015-12-15T03:00:00+00:00".to_string())
        );
        assert!(!episode.has_file);
    }

    #[test]
    fn test_episode_null_values_fall_back_to_defaults() {
        let json = r#"{
            "seriesId": 2,
            "title": null,
            "overview": null,
            "airDate": null,
            "airDateUTC": null,
            "monitored": true,
            "id": 9
        }"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.id, 9);
        assert_eq!(episode.title, "");
        assert_eq!(episode.overview, "");
        assert_eq!(episode.air_date_utc, None);
        assert!(episode.monitored);
    }
}
