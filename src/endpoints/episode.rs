use super::{EPISODE_ENDPOINT, item_path};
use crate::client::require_positive_id;
use crate::query::QueryParams;
use crate::{Episode, Result, Sonarr};

impl Sonarr {
    /// Retrieves all episodes of the series with the given id.
    pub fn get_episodes(&self, series_id: i64) -> Result<Vec<Episode>> {
        require_positive_id("seriesID", series_id)?;
        let mut params = QueryParams::new();
        params.set("seriesId", series_id.to_string());
        self.get(EPISODE_ENDPOINT, Some(params))
    }

    /// Retrieves the episode with the given id.
    pub fn get_episode(&self, episode_id: i64) -> Result<Episode> {
        require_positive_id("episodeID", episode_id)?;
        self.get(&item_path(EPISODE_ENDPOINT, episode_id), None)
    }

    /// Sends `episode` back to the server and returns what the server stored.
    ///
    /// Pass an episode previously obtained from [`get_episode`](Self::get_episode)
    /// or [`get_episodes`](Self::get_episodes). The server only applies a
    /// change of `monitored`; other modifications are silently dropped, which
    /// the returned episode reflects.
    pub fn update_episode(&self, episode: &Episode) -> Result<Episode> {
        require_positive_id("episodeID", episode.id)?;
        self.put(&item_path(EPISODE_ENDPOINT, episode.id), episode)
    }
}
