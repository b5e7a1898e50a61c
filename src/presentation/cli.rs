//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --endpoint, --token) are inherited by all subcommands
//! - `deploy` is interactive by default; `--noninteractive` turns prompts off

use std::ffi::OsString;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Exoframe - deploy images to an Exoframe server
#[derive(Parser, Debug)]
#[command(name = "exoframe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Server URL (overrides config and EXOFRAME_ENDPOINT)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Access token (overrides config and EXOFRAME_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy image on exoframe server
    Deploy {
        /// Image to deploy (will prompt with the server's images if omitted)
        image: Option<String>,

        /// Port mapping, e.g. 80:80 (can be specified multiple times)
        #[arg(short, long, value_name = "PORT")]
        ports: Vec<String>,

        /// Label as key=value (can be specified multiple times)
        #[arg(short, long, value_name = "KEY=VALUE")]
        labels: Vec<String>,

        /// Environment variable, e.g. NODE_ENV=production (can be specified multiple times)
        #[arg(short, long, value_name = "VAR")]
        env: Vec<String>,

        /// Skip interactive prompts for ports, labels and env
        #[arg(long, alias = "ni")]
        noninteractive: bool,
    },
}

/// Rewrite the legacy single-dash `-ni` flag to `--noninteractive`.
///
/// clap only supports single-character short flags, so `-ni` would otherwise
/// be read as `-n -i`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut seen_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == "--" {
                seen_separator = true;
            }
            if !seen_separator && arg == "-ni" {
                OsString::from("--noninteractive")
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parse from the process arguments, accepting `-ni`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}
