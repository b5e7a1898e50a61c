//! Domain Entities
//!
//! - `Label` - parsed `key=value` metadata
//! - `ParameterSet`, `ServiceDescriptor`, `DeploymentRequest` - what gets sent
//! - `ContainerRecord` - what comes back

mod label;
mod service;

pub use label::{parse_labels, Label};
pub use service::{ContainerRecord, DeploymentRequest, ParameterSet, ServiceDescriptor};
