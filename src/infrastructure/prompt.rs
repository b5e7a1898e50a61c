//! Terminal Prompter
//!
//! Asks the operator through `dialoguer` on stderr.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};

use crate::domain::ports::{PromptKind, PromptSpec, Prompter};
use crate::error::{ExoError, ExoResult};

/// Interactive prompter backed by the terminal.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, spec: &PromptSpec) -> ExoResult<String> {
        // dialoguer themes add their own separator after the prompt
        let message = spec.message.trim_end_matches(':');

        match spec.kind {
            PromptKind::Input => Input::<String>::with_theme(self.theme.as_ref())
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ExoError::Prompt(e.to_string())),
            PromptKind::Select => {
                if spec.choices.is_empty() {
                    return Err(ExoError::Prompt(format!("nothing to choose for '{}'", spec.name)));
                }
                let index = Select::with_theme(self.theme.as_ref())
                    .with_prompt(message)
                    .items(&spec.choices)
                    .default(0)
                    .interact()
                    .map_err(|e| ExoError::Prompt(e.to_string()))?;
                Ok(spec.choices[index].clone())
            }
        }
    }
}
