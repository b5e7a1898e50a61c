//! Exoframe - deploy images to an Exoframe server
//!
//! The library holds the deploy pipeline (image selection, parameter
//! resolution, request building, submission) behind trait ports, plus the
//! HTTP and terminal adapters the `exoframe` binary wires together.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CliParameters, DeployOptions, DeployResult, DeployUseCase};
pub use config::Config;
pub use domain::entities::{
    parse_labels, ContainerRecord, DeploymentRequest, Label, ParameterSet, ServiceDescriptor,
};
pub use domain::services::{normalize, split_comma_list, RawValues};
pub use error::{DeployError, ExoError, ExoResult, TransportError};
