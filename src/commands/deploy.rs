//! Deploy command entry point

use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use exoframe::domain::ports::ErrorClassifier;
use exoframe::presentation::{create_deploy_use_case, ColorWhen};
use exoframe::{Config, DeployError, DeployOptions, DeploymentRequest};

use crate::ui::context::UiContext;
use crate::ui::error::TerminalErrorClassifier;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::deploy::{render_deploy_failure, render_deploy_header, render_deploy_success};

/// Deploy command entry point
#[allow(clippy::too_many_arguments)]
pub fn cmd_deploy(
    image: Option<String>,
    ports: Vec<String>,
    labels: Vec<String>,
    env: Vec<String>,
    noninteractive: bool,
    endpoint: Option<String>,
    token: Option<String>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    if json && image.as_deref().map_or(true, str::is_empty) {
        anyhow::bail!("an image is required with --json");
    }

    let config = resolve_config(endpoint, token);
    debug!("using {:?}", config);

    let ui = UiContext::new(json, color);
    let use_case = create_deploy_use_case(&config, !json, ui.color)
        .context("failed to set up the HTTP client")?;

    let options = DeployOptions::new()
        .with_image(image)
        .with_ports(ports)
        .with_labels(labels)
        .with_env(env)
        .with_interactive(!noninteractive && !json);

    let image = use_case.select_image(&options)?;

    if !json {
        print!(
            "{}",
            render_deploy_header(&image, &config.endpoint, ui.color, ui.unicode)
        );
    }

    let params = use_case.resolve_parameters(&options);
    let request = DeploymentRequest::single(image, params);

    match use_case.submit(&request) {
        Ok(result) => {
            if json {
                let _ = crate::ui::json::emit(crate::ui::json::deploy_success(&result));
            } else {
                print!("{}", render_deploy_success(&result, ui.color, ui.unicode));
                let _ = std::io::stdout().flush();
            }
            Ok(())
        }
        Err(err) => {
            report_failure(&err, &ui, &TerminalErrorClassifier::new(&ui));
            std::process::exit(1);
        }
    }
}

fn resolve_config(endpoint: Option<String>, token: Option<String>) -> Config {
    let mut config = Config::load_or_default();
    if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
        config.endpoint = endpoint;
    }
    if let Some(token) = token {
        config.token = token;
    }
    config
}

fn report_failure(err: &DeployError, ui: &UiContext, classifier: &dyn ErrorClassifier) {
    if classifier.handle(err) {
        return;
    }

    if ui.json {
        let _ = crate::ui::json::emit(crate::ui::json::deploy_failed(&err.to_string()));
        return;
    }

    print!("{}", render_deploy_failure(ui.color, ui.unicode));
    let _ = std::io::stdout().flush();
    eprintln!("{} {}", Icon::Arrow.colored(ui.color, ui.unicode), err);
}
