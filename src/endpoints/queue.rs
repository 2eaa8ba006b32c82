use super::QUEUE_ENDPOINT;
use crate::{Queue, Result, Sonarr};

impl Sonarr {
    /// Retrieves the downloads the server is currently tracking.
    pub fn get_queue(&self) -> Result<Vec<Queue>> {
        self.get(QUEUE_ENDPOINT, None)
    }
}
