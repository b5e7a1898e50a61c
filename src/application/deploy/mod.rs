//! Deploy Module
//!
//! Orchestrates the deployment flow for Exoframe.
//!
//! ## Structure
//!
//! - `options` - Input types (`DeployOptions`, `CliParameters`)
//! - `image` - Image selection
//! - `parameters` - Ports/labels/env resolution
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use exoframe::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(transport, images, prompter);
//! let result = use_case.execute(&DeployOptions::new().with_image(Some("web".into())));
//! ```

mod image;
mod options;
mod parameters;
mod result;
mod use_case;

pub use image::{select_image, IMAGE_PROMPT};
pub use options::{CliParameters, DeployOptions};
pub use parameters::{
    parameters_from_cli, resolve_parameters, ENV_PROMPT, LABELS_PROMPT, PORTS_PROMPT,
};
pub use result::DeployResult;
pub use use_case::DeployUseCase;
