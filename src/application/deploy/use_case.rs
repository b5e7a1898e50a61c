//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Select the image (CLI value or operator choice)
//! 2. Resolve ports/labels/env (CLI values, optionally overridden)
//! 3. Build the request
//! 4. Submit it and check the reported containers
//!
//! Every step is exposed on its own so the CLI can print between them.

use anyhow::Result;
use log::{debug, info};

use crate::domain::entities::{DeploymentRequest, ParameterSet};
use crate::domain::ports::{DeployTransport, ImageSource, Prompter};
use crate::error::{DeployError, ExoResult};

use super::image;
use super::options::DeployOptions;
use super::parameters;
use super::result::DeployResult;

/// Deploy use case - parameterized by its ports so tests can script them.
pub struct DeployUseCase<T, I, P>
where
    T: DeployTransport,
    I: ImageSource,
    P: Prompter,
{
    transport: T,
    images: I,
    prompter: P,
}

impl<T, I, P> DeployUseCase<T, I, P>
where
    T: DeployTransport,
    I: ImageSource,
    P: Prompter,
{
    pub fn new(transport: T, images: I, prompter: P) -> Self {
        Self {
            transport,
            images,
            prompter,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Errors are `ExoError` (image selection) or `DeployError` (submission);
    /// callers that care can downcast.
    pub fn execute(&self, options: &DeployOptions) -> Result<DeployResult> {
        let image = self.select_image(options)?;
        let params = self.resolve_parameters(options);
        let request = DeploymentRequest::single(image, params);
        Ok(self.submit(&request)?)
    }

    pub fn select_image(&self, options: &DeployOptions) -> ExoResult<String> {
        image::select_image(options.image.as_deref(), &self.images, &self.prompter)
    }

    pub fn resolve_parameters(&self, options: &DeployOptions) -> ParameterSet {
        parameters::resolve_parameters(&options.parameters, options.interactive, &self.prompter)
    }

    /// Send the request once and interpret the answer.
    pub fn submit(&self, request: &DeploymentRequest) -> Result<DeployResult, DeployError> {
        let image = request
            .services
            .first()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        debug!("submitting {} service(s)", request.services.len());

        match self.transport.deploy(request)? {
            Some(containers) if !containers.is_empty() => {
                info!("{} started {} container(s)", image, containers.len());
                Ok(DeployResult { image, containers })
            }
            _ => Err(DeployError::EmptyResult),
        }
    }
}
