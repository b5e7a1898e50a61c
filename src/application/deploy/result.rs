//! Deploy Result

use crate::domain::entities::ContainerRecord;

/// Result of a successful deployment
#[derive(Debug, Clone, PartialEq)]
pub struct DeployResult {
    /// Image that was deployed
    pub image: String,
    /// Containers reported by the server, never empty
    pub containers: Vec<ContainerRecord>,
}

impl DeployResult {
    pub fn container_ids(&self) -> Vec<&str> {
        self.containers.iter().map(|c| c.id.as_str()).collect()
    }
}
