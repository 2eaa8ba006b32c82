use super::SYSTEM_STATUS_ENDPOINT;
use crate::{Result, Sonarr, SystemStatus};

impl Sonarr {
    /// Retrieves version and runtime information about the server.
    pub fn get_system_status(&self) -> Result<SystemStatus> {
        self.get(SYSTEM_STATUS_ENDPOINT, None)
    }
}
