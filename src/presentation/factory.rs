//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::domain::ports::{NonInteractivePrompter, Prompter};
use crate::error::TransportError;
use crate::infrastructure::{DialoguerPrompter, ServerClient};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type TerminalDeployUseCase = DeployUseCase<ServerClient, ServerClient, Box<dyn Prompter>>;

/// Create a deploy use case talking to the configured server
///
/// `allow_prompts = false` swaps in a prompter that refuses every question
/// (used for `--json`, where stdout must stay machine-readable).
pub fn create_deploy_use_case(
    config: &Config,
    allow_prompts: bool,
    color: bool,
) -> Result<TerminalDeployUseCase, TransportError> {
    let client = ServerClient::new(config)?;
    let prompter: Box<dyn Prompter> = if allow_prompts {
        Box::new(DialoguerPrompter::new(color))
    } else {
        Box::new(NonInteractivePrompter)
    };

    Ok(DeployUseCase::new(client.clone(), client, prompter))
}
