//! `POST /api/deploy`

use crate::domain::entities::{ContainerRecord, DeploymentRequest};
use crate::domain::ports::DeployTransport;
use crate::error::TransportError;

use super::client::ServerClient;

pub const DEPLOY_PATH: &str = "/api/deploy";

impl DeployTransport for ServerClient {
    fn deploy(
        &self,
        request: &DeploymentRequest,
    ) -> Result<Option<Vec<ContainerRecord>>, TransportError> {
        self.post_json(DEPLOY_PATH, request)
    }
}
