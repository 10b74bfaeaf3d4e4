// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin client for the fleetctl binary under test.

use std::path::{Path, PathBuf};

use crate::runner::{CommandRunner, Invocation, RunError};
use crate::unit::UnitState;

/// Invokes fleetctl subcommands through a [`CommandRunner`].
#[derive(Debug, Clone)]
pub struct Fleetctl<R> {
    bin: PathBuf,
    runner: R,
}

impl<R: CommandRunner> Fleetctl<R> {
    pub fn new(bin: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            bin: bin.into(),
            runner,
        }
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run(&self, args: &[&str]) -> Result<Invocation, RunError> {
        self.runner.run(&self.bin, args)
    }

    /// `list-machines --no-legend`, one trimmed entry per non-empty line.
    pub fn list_machines(&self) -> Result<Vec<String>, RunError> {
        let out = self.run(&["list-machines", "--no-legend"])?;
        Ok(out
            .stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// `list-units --no-legend`, raw stdout.
    pub fn list_units(&self) -> Result<String, RunError> {
        Ok(self.run(&["list-units", "--no-legend"])?.stdout)
    }

    pub fn unit_state(&self, name: &str) -> Result<UnitState, RunError> {
        let listing = self.list_units()?;
        Ok(UnitState::from_listing(&listing, name))
    }

    /// `start --no-block <unit file>`
    pub fn start_no_block(&self, unit_file: &Path) -> Result<Invocation, RunError> {
        let path = unit_file.to_string_lossy();
        self.run(&["start", "--no-block", &path])
    }

    /// `unload --no-block <unit>`
    pub fn unload_no_block(&self, name: &str) -> Result<Invocation, RunError> {
        self.run(&["unload", "--no-block", name])
    }

    /// `destroy <unit or unit file>`
    pub fn destroy(&self, target: &str) -> Result<Invocation, RunError> {
        self.run(&["destroy", target])
    }
}

#[cfg(test)]
#[path = "fleetctl_tests.rs"]
mod tests;
