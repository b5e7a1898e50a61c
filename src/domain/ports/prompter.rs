//! Prompter Port
//!
//! Operator interaction behind a trait so the deploy flow can run against a
//! real terminal or against scripted answers.

use std::fmt;
use std::str::FromStr;

use crate::error::{ExoError, ExoResult};

/// Kind of question to put to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text, empty answer allowed
    Input,
    /// Pick exactly one of `PromptSpec::choices`
    Select,
}

impl FromStr for PromptKind {
    type Err = ExoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(PromptKind::Input),
            "select" | "list" => Ok(PromptKind::Select),
            other => Err(ExoError::UnsupportedPromptKind(other.to_string())),
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptKind::Input => f.write_str("input"),
            PromptKind::Select => f.write_str("select"),
        }
    }
}

/// A single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// Stable identifier (`ports`, `labels`, `env`, `image`)
    pub name: &'static str,
    pub message: String,
    pub kind: PromptKind,
    /// Only meaningful for `PromptKind::Select`
    pub choices: Vec<String>,
}

impl PromptSpec {
    pub fn input(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
            kind: PromptKind::Input,
            choices: Vec::new(),
        }
    }

    pub fn select(name: &'static str, message: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            name,
            message: message.into(),
            kind: PromptKind::Select,
            choices,
        }
    }
}

/// Trait for asking the operator questions.
///
/// For `Input` the answer is the typed text (possibly empty). For `Select`
/// the answer is the chosen entry of `choices`.
pub trait Prompter {
    fn ask(&self, spec: &PromptSpec) -> ExoResult<String>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask(&self, spec: &PromptSpec) -> ExoResult<String> {
        (**self).ask(spec)
    }
}

/// Prompter used when interaction is disabled.
///
/// Any question is an error; callers in non-interactive mode must not ask.
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn ask(&self, spec: &PromptSpec) -> ExoResult<String> {
        Err(ExoError::Prompt(format!(
            "'{}' requires interactive input, which is disabled",
            spec.name
        )))
    }
}
