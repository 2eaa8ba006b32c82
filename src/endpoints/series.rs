use super::{SERIES_ENDPOINT, item_path};
use crate::client::require_positive_id;
use crate::query::QueryParams;
use crate::{Result, Series, Sonarr};

impl Sonarr {
    /// Retrieves every series the server tracks, in server order.
    pub fn get_all_series(&self) -> Result<Vec<Series>> {
        self.get(SERIES_ENDPOINT, None)
    }

    /// Retrieves the series with the given id.
    pub fn get_series(&self, series_id: i64) -> Result<Series> {
        require_positive_id("seriesID", series_id)?;
        self.get(&item_path(SERIES_ENDPOINT, series_id), None)
    }

    /// Sends `series` back to the server and returns what the server stored.
    ///
    /// Pass a series previously obtained from [`get_series`](Self::get_series)
    /// or [`get_all_series`](Self::get_all_series).
    pub fn update_series(&self, series: &Series) -> Result<Series> {
        require_positive_id("seriesID", series.id)?;
        self.put(&item_path(SERIES_ENDPOINT, series.id), series)
    }

    /// Deletes the series with the given id.
    ///
    /// With `delete_files` the series folder and all its files are removed
    /// from disk as well.
    pub fn delete_series(&self, series_id: i64, delete_files: bool) -> Result<Series> {
        require_positive_id("seriesID", series_id)?;
        let mut params = QueryParams::new();
        if delete_files {
            params.set("deleteFiles", "true");
        }
        self.delete(&item_path(SERIES_ENDPOINT, series_id), Some(params))
    }
}
