//! Parameter resolution
//!
//! CLI values first, then (interactive only) one free-text prompt per
//! category. A non-empty answer replaces that whole category.

use log::{debug, warn};

use crate::domain::entities::{parse_labels, ParameterSet};
use crate::domain::ports::{PromptSpec, Prompter};
use crate::domain::services::{normalize, split_comma_list};

use super::options::CliParameters;

pub const PORTS_PROMPT: &str = "Port mappings (comma separated):";
pub const LABELS_PROMPT: &str = "Custom labels (comma separated):";
pub const ENV_PROMPT: &str = "Environment variables (comma separated):";

/// Normalize CLI values without asking anything.
pub fn parameters_from_cli(cli: &CliParameters) -> ParameterSet {
    ParameterSet {
        ports: normalize(cli.ports.clone()),
        labels: parse_labels(normalize(cli.labels.clone())),
        env: normalize(cli.env.clone()),
    }
}

/// Resolve the final parameter set for one deployment.
///
/// Never fails: an empty answer, or a prompt that could not be shown, keeps
/// the CLI value for that category.
pub fn resolve_parameters(
    cli: &CliParameters,
    interactive: bool,
    prompter: &dyn Prompter,
) -> ParameterSet {
    let mut params = parameters_from_cli(cli);
    if !interactive {
        return params;
    }

    if let Some(ports) = ask_list(prompter, PromptSpec::input("ports", PORTS_PROMPT)) {
        debug!("ports overridden interactively: {:?}", ports);
        params.ports = ports;
    }

    if let Some(raw) = ask_list(prompter, PromptSpec::input("labels", LABELS_PROMPT)) {
        let labels = parse_labels(&raw);
        if labels.len() < raw.len() {
            debug!("dropped {} malformed label(s)", raw.len() - labels.len());
        }
        params.labels = labels;
    }

    if let Some(env) = ask_list(prompter, PromptSpec::input("env", ENV_PROMPT)) {
        debug!("env overridden interactively ({} entries)", env.len());
        params.env = env;
    }

    params
}

fn ask_list(prompter: &dyn Prompter, spec: PromptSpec) -> Option<Vec<String>> {
    match prompter.ask(&spec) {
        Ok(answer) => split_comma_list(&answer),
        Err(err) => {
            warn!("keeping command-line {}: {}", spec.name, err);
            None
        }
    }
}
