//! Deploy Transport Port
//!
//! Sends a `DeploymentRequest` to the server and hands back the decoded body.

use crate::domain::entities::{ContainerRecord, DeploymentRequest};
use crate::error::TransportError;

pub trait DeployTransport {
    /// Issue exactly one deploy request.
    ///
    /// `Ok(None)` means the server answered 2xx with no body.
    fn deploy(
        &self,
        request: &DeploymentRequest,
    ) -> Result<Option<Vec<ContainerRecord>>, TransportError>;
}
