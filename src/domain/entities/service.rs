//! Deployment Entities
//!
//! - `ParameterSet` - resolved ports/labels/env for one invocation
//! - `ServiceDescriptor` - one image plus its runtime parameters
//! - `DeploymentRequest` - body of `POST /api/deploy`
//! - `ContainerRecord` - one container reported back by the server

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::label::Label;

/// Runtime parameters for a deployed service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub ports: Vec<String>,
    pub labels: Vec<Label>,
    pub env: Vec<String>,
}

/// The unit of deployment sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub ports: Vec<String>,
    pub labels: Vec<Label>,
    pub env: Vec<String>,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, params: ParameterSet) -> Self {
        let ParameterSet { ports, labels, env } = params;
        Self {
            name: name.into(),
            ports,
            labels,
            env,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub services: Vec<ServiceDescriptor>,
}

impl DeploymentRequest {
    /// Request deploying exactly one image.
    pub fn single(image: impl Into<String>, params: ParameterSet) -> Self {
        Self {
            services: vec![ServiceDescriptor::new(image, params)],
        }
    }
}

/// A container started by the server.
///
/// Only `id` is interpreted; any other fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContainerRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}
