// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fleetcheck - smoke checks for a fleet cluster

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{list, machines, run};
use fleetcheck_core::{Config, ConfigError, Overrides};
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "fleetcheck",
    version,
    about = "Smoke checks for a fleet cluster, driven through fleetctl"
)]
struct Cli {
    /// Path to fleetctl (overrides FLEETCTL_BIN_PATH)
    #[arg(long, value_name = "PATH", global = true)]
    fleetctl: Option<PathBuf>,

    /// Attempts when waiting for the cluster to converge (overrides FLEETCHECK_TRY_TIMES)
    #[arg(long, value_name = "N", global = true)]
    attempts: Option<NonZeroU32>,

    /// Milliseconds between attempts (overrides FLEETCHECK_TRY_INTERVAL_MS)
    #[arg(long = "interval-ms", value_name = "MS", global = true)]
    interval_ms: Option<u64>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run smoke checks against the cluster
    Run(run::RunArgs),
    /// List available checks
    List,
    /// Print the machines fleetctl reports
    Machines,
}

fn main() {
    if let Err(e) = run() {
        let code = exit_code(&e);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Exit code for an error: explicit codes win, configuration errors are
/// usage errors (2), anything else is a failure (1).
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<exit_error::ExitError>() {
        return e.code;
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    1
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `{source}` in their message).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Command-line flags, which take precedence over the environment.
fn flag_overrides(cli: &Cli) -> Overrides {
    Overrides {
        fleetctl: cli.fleetctl.clone(),
        attempts: cli.attempts,
        interval: cli.interval_ms.map(Duration::from_millis),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let format = cli.output;

    let Some(command) = cli.command.as_ref() else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if let Commands::List = command {
        return list::handle(format);
    }

    let config = Config::from_env_with(flag_overrides(&cli))?;
    tracing::debug!(fleetctl = %config.fleetctl.display(), retry = ?config.retry, "resolved configuration");

    match cli.command {
        Some(Commands::Run(args)) => run::handle(args, &config, format),
        Some(Commands::Machines) => machines::handle(&config, format),
        Some(Commands::List) | None => Ok(()),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
