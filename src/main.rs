//! Exoframe CLI - deploy images to an Exoframe server
//!
//! Usage: exoframe <COMMAND>
//!
//! Commands:
//!   deploy  Deploy image on exoframe server

mod commands;
mod ui;

use anyhow::Result;
use log::LevelFilter;

use exoframe::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse_normalized();
    let json = cli.json;

    if let Err(err) = setup_logging(cli.verbose) {
        eprintln!("[WARN] failed to initialize logging: {}", err);
    }

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Deploy {
            image,
            ports,
            labels,
            env,
            noninteractive,
        } => commands::deploy::cmd_deploy(
            image,
            ports,
            labels,
            env,
            noninteractive,
            cli.endpoint,
            cli.token,
            cli.json,
            cli.color,
        ),
    }
}

fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn setup_logging(verbose: u8) -> Result<(), fern::InitError> {
    let level = level_for_verbosity(verbose);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
