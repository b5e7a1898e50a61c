use exoframe::domain::ports::ErrorClassifier;
use exoframe::{DeployError, ExoError};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const AUTH_EXPIRED: &str = "Error: authorization expired! Please, relogin and try again.";

/// Shared handling for server errors that mean the same thing for every command.
pub struct TerminalErrorClassifier {
    json: bool,
    color: bool,
    unicode: bool,
}

impl TerminalErrorClassifier {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            json: ui.json,
            color: ui.color,
            unicode: ui.unicode,
        }
    }

    /// Message to show for errors this classifier owns.
    pub fn classify(error: &DeployError) -> Option<&'static str> {
        match error.status() {
            Some(401) => Some(AUTH_EXPIRED),
            _ => None,
        }
    }
}

impl ErrorClassifier for TerminalErrorClassifier {
    fn handle(&self, error: &DeployError) -> bool {
        let Some(message) = Self::classify(error) else {
            return false;
        };

        if self.json {
            let _ = crate::ui::json::emit(crate::ui::json::deploy_failed(message));
        } else {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(self.color, self.unicode),
                ColoredText::error(message).render(self.color)
            );
        }
        true
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(ExoError::NoImages) = err.downcast_ref::<ExoError>() {
        return format!("[ERROR] {}\n  Pass an image name: exoframe deploy <IMAGE>\n", err);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("::error title=Exoframe::{}", err);
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use exoframe::TransportError;

    fn status(code: u16) -> DeployError {
        DeployError::Transport(TransportError::Status {
            status: code,
            body: "nope".to_string(),
        })
    }

    #[test]
    fn unauthorized_is_classified_as_expired_auth() {
        assert_eq!(TerminalErrorClassifier::classify(&status(401)), Some(AUTH_EXPIRED));
    }

    #[test]
    fn other_failures_fall_through() {
        assert_eq!(TerminalErrorClassifier::classify(&status(500)), None);
        assert_eq!(TerminalErrorClassifier::classify(&DeployError::EmptyResult), None);
        assert_eq!(
            TerminalErrorClassifier::classify(&DeployError::Transport(TransportError::Request(
                "connection refused".to_string()
            ))),
            None
        );
    }

    #[test]
    fn unhandled_error_returns_false() {
        let classifier = TerminalErrorClassifier {
            json: false,
            color: false,
            unicode: false,
        };
        assert!(!classifier.handle(&DeployError::EmptyResult));
    }

    #[test]
    fn format_error_includes_cause_chain() {
        let err = anyhow::Error::new(ExoError::ImageListing(TransportError::Request(
            "connection refused".to_string(),
        )));
        let out = format_error(&err);
        assert!(out.starts_with("[ERROR] could not list images"));
        assert!(out.contains("connection refused"));
    }

    #[test]
    fn format_error_hints_at_image_argument() {
        let err = anyhow::Error::new(ExoError::NoImages);
        let out = format_error(&err);
        assert!(out.starts_with("[ERROR] no images available to deploy"));
        assert!(out.contains("exoframe deploy <IMAGE>"));
    }
}
