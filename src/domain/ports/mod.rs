//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_transport;
pub mod error_classifier;
pub mod image_source;
pub mod prompter;

pub use deploy_transport::DeployTransport;
pub use error_classifier::{ErrorClassifier, PassthroughClassifier};
pub use image_source::ImageSource;
pub use prompter::{NonInteractivePrompter, PromptKind, PromptSpec, Prompter};
