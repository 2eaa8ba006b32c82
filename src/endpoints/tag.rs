use super::TAG_ENDPOINT;
use crate::{Result, Sonarr, Tag};

impl Sonarr {
    /// Retrieves all tags defined on the server.
    pub fn get_tags(&self) -> Result<Vec<Tag>> {
        self.get(TAG_ENDPOINT, None)
    }
}
