use super::DISK_SPACE_ENDPOINT;
use crate::{DiskSpace, Result, Sonarr};

impl Sonarr {
    /// Retrieves free and total space for every volume mounted on the server.
    pub fn get_disk_space(&self) -> Result<Vec<DiskSpace>> {
        self.get(DISK_SPACE_ENDPOINT, None)
    }
}
