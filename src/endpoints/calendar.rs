use super::CALENDAR_ENDPOINT;
use crate::query::QueryParams;
use crate::{Calendar, Result, Sonarr};

impl Sonarr {
    /// Retrieves the episodes that aired or will air between `start` and `end`.
    ///
    /// Both bounds are passed to the server as given (usually `YYYY-MM-DD`).
    /// An empty bound is left out, in which case the server picks its
    /// default window of today and tomorrow.
    pub fn get_calendar(&self, start: &str, end: &str) -> Result<Vec<Calendar>> {
        let mut params = QueryParams::new();
        if !start.is_empty() {
            params.set("start", start);
        }
        if !end.is_empty() {
            params.set("end", end);
        }
        self.get(CALENDAR_ENDPOINT, Some(params))
    }
}
