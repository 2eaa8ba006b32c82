use super::{EPISODE_FILE_ENDPOINT, item_path};
use crate::client::require_positive_id;
use crate::query::QueryParams;
use crate::{EpisodeFile, Result, Sonarr};

impl Sonarr {
    /// Retrieves all episode files of the series with the given id.
    pub fn get_episode_files(&self, series_id: i64) -> Result<Vec<EpisodeFile>> {
        require_positive_id("seriesID", series_id)?;
        let mut params = QueryParams::new();
        params.set("seriesId", series_id.to_string());
        self.get(EPISODE_FILE_ENDPOINT, Some(params))
    }

    /// Retrieves the episode file with the given id.
    pub fn get_episode_file(&self, episode_file_id: i64) -> Result<EpisodeFile> {
        require_positive_id("episodeFileID", episode_file_id)?;
        self.get(&item_path(EPISODE_FILE_ENDPOINT, episode_file_id), None)
    }

    /// Deletes the episode file with the given id.
    ///
    /// This removes the media file from the server's disk, not just the
    /// database record.
    pub fn delete_episode_file(&self, episode_file_id: i64) -> Result<EpisodeFile> {
        require_positive_id("episodeFileID", episode_file_id)?;
        self.delete(&item_path(EPISODE_FILE_ENDPOINT, episode_file_id), None)
    }
}
