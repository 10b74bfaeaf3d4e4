// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fleetcheck run`: execute smoke checks in order.

use anyhow::Result;
use clap::Args;
use fleetcheck_core::{
    Check, CommandRunner, Config, Fleetctl, Report, Sleeper, Suite, SystemRunner, ThreadSleeper,
    DEFAULT_UNIT_NAME,
};

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Checks to run, in order (default: all)
    #[arg(value_name = "CHECK")]
    pub checks: Vec<Check>,

    /// Unit name staged by run-service
    #[arg(long, value_name = "NAME", default_value = DEFAULT_UNIT_NAME)]
    pub unit: String,
}

impl RunArgs {
    /// Selected checks, or all of them when none were named.
    pub fn selected(&self) -> Vec<Check> {
        if self.checks.is_empty() {
            Check::ALL.to_vec()
        } else {
            self.checks.clone()
        }
    }
}

pub fn handle(args: RunArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let fleet = Fleetctl::new(&config.fleetctl, SystemRunner);
    let report = execute(&args, &fleet, ThreadSleeper, config);
    print!("{}", output::format_report(&report, format)?);

    if !report.passed() {
        return Err(ExitError::silent(1).into());
    }
    Ok(())
}

pub(crate) fn execute<R: CommandRunner, S: Sleeper>(
    args: &RunArgs,
    fleet: &Fleetctl<R>,
    sleeper: S,
    config: &Config,
) -> Report {
    Suite::new(fleet, sleeper, config.retry)
        .with_unit_name(args.unit.clone())
        .run(&args.selected())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
