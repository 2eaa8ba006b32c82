use super::Quality;
use serde::{Deserialize, Serialize};

/// A media file on the server's disk that belongs to an episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeFile {
    #[serde(rename = "seriesId", deserialize_with = "super::null_as_default")]
    pub series_id: i64,
    #[serde(rename = "seasonNumber", deserialize_with = "super::null_as_default")]
    pub season_number: i32,
    /// Path relative to the series folder
    #[serde(rename = "relativePath", deserialize_with = "super::null_as_default")]
    pub relative_path: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub path: String,
    /// File size in bytes
    #[serde(deserialize_with = "super::null_as_default")]
    pub size: i64,
    #[serde(rename = "dateAdded", deserialize_with = "super::null_as_default")]
    pub date_added: String,
    #[serde(rename = "sceneName", deserialize_with = "super::null_as_default")]
    pub scene_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub quality: Quality,
    #[serde(rename = "qualityCutoffNotMet", deserialize_with = "super::null_as_default")]
    pub quality_cutoff_not_met: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_file_decodes_nested_quality() {
        let json = r#"{
            "seriesId": 3,
            "seasonNumber": 4,
            "relativePath": "Season 04/S04E01.mkv",
            "path": "/tv/Show/Season 04/S04E01.mkv",
            "size": 1516223437,
            "dateAdded": "2016-08-27T02:03:18.1327012Z",
            "quality": {
                "quality": {"id": 4, "name": "HDTV-720p"},
                "revision": {"version": 1, "real": 0}
            },
            "qualityCutoffNotMet": false,
            "id": 2
        }"#;
        let file: EpisodeFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.size, 1_516_223_437);
        assert_eq!(file.quality.quality.name, "HDTV-720p");
        assert_eq!(file.quality.revision.version, 1);
        assert!(!file.quality.proper);
        assert_eq!(file.scene_name, "");
    }
}
