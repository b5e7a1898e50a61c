//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::domain::services::RawValues;

/// Parameter values exactly as they came from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliParameters {
    pub ports: RawValues,
    pub labels: RawValues,
    pub env: RawValues,
}

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Image to deploy; asked for when missing
    pub image: Option<String>,
    /// Raw `--ports/--labels/--env` values
    pub parameters: CliParameters,
    /// Ask the operator for parameter overrides
    pub interactive: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self {
            image: None,
            parameters: CliParameters::default(),
            interactive: true,
        }
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn with_ports(mut self, ports: impl Into<RawValues>) -> Self {
        self.parameters.ports = ports.into();
        self
    }

    pub fn with_labels(mut self, labels: impl Into<RawValues>) -> Self {
        self.parameters.labels = labels.into();
        self
    }

    pub fn with_env(mut self, env: impl Into<RawValues>) -> Self {
        self.parameters.env = env.into();
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new()
    }
}
