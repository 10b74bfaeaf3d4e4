// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Smoke checks against a fleet cluster.
//!
//! Each check drives fleetctl and waits for the cluster to converge. A check
//! fails fast on command errors and fails slow (after the full retry budget)
//! when the cluster never reaches the awaited state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::fleetctl::Fleetctl;
use crate::retry::RetryPolicy;
use crate::runner::{CommandRunner, RunError};
use crate::sleep::Sleeper;
use crate::unit::UnitState;
use crate::unit_file::{DestroyOnDrop, UnitFile, HELLO_SERVICE};

/// Unit name used by the run-service check.
pub const DEFAULT_UNIT_NAME: &str = "hello.service";

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("fleetctl {step} failed: {source}")]
    Command {
        step: &'static str,
        #[source]
        source: RunError,
    },
    #[error("no machines listed")]
    NoMachines,
    #[error("{unit} did not become {expected} after {attempts} attempts (last observed: {})", fmt_last(.last))]
    NotReached {
        unit: String,
        expected: UnitState,
        last: Option<UnitState>,
        attempts: u32,
    },
    #[error("failed creating unit file {name}: {source}")]
    UnitFile {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

fn fmt_last(last: &Option<UnitState>) -> String {
    last.map_or_else(|| "nothing, list-units failed".to_string(), |s| s.to_string())
}

fn step(step: &'static str) -> impl FnOnce(RunError) -> CheckError {
    move |source| CheckError::Command { step, source }
}

/// `list-machines` reports at least one machine. Returns the machine count.
pub fn list_machines<R: CommandRunner>(fleet: &Fleetctl<R>) -> Result<usize, CheckError> {
    let machines = fleet.list_machines().map_err(step("list-machines"))?;
    if machines.is_empty() {
        return Err(CheckError::NoMachines);
    }
    tracing::info!(count = machines.len(), "machines listed");
    Ok(machines.len())
}

/// Start, unload and destroy a unit, waiting after each step for the
/// cluster to reflect it.
///
/// The unit file and the cluster-side unit are released on every exit path.
pub fn run_service<R, S>(
    fleet: &Fleetctl<R>,
    sleeper: S,
    policy: &RetryPolicy,
    name: &str,
) -> Result<(), CheckError>
where
    R: CommandRunner,
    S: Sleeper,
{
    let file = UnitFile::create(name, HELLO_SERVICE).map_err(|source| CheckError::UnitFile {
        name: name.to_string(),
        source,
    })?;
    let _destroy = DestroyOnDrop::new(fleet, file.path().to_string_lossy());

    fleet.start_no_block(file.path()).map_err(step("start"))?;
    await_state(fleet, &sleeper, policy, name, UnitState::Active)?;

    fleet.unload_no_block(name).map_err(step("unload"))?;
    await_state(fleet, &sleeper, policy, name, UnitState::Inactive)?;

    fleet.destroy(name).map_err(step("destroy"))?;
    await_state(fleet, &sleeper, policy, name, UnitState::Absent)?;

    tracing::info!(unit = name, "unit lifecycle converged");
    Ok(())
}

/// Poll `list-units` until `name` is observed in `expected` state.
///
/// A failing `list-units` counts as not yet converged.
fn await_state<R, S>(
    fleet: &Fleetctl<R>,
    sleeper: &S,
    policy: &RetryPolicy,
    name: &str,
    expected: UnitState,
) -> Result<(), CheckError>
where
    R: CommandRunner,
    S: Sleeper,
{
    let mut last = None;
    let reached = policy.poll(sleeper, || match fleet.unit_state(name) {
        Ok(state) => {
            last = Some(state);
            state == expected
        }
        Err(e) => {
            tracing::warn!(unit = name, error = %e, "list-units failed while polling");
            false
        }
    });

    if !reached {
        return Err(CheckError::NotReached {
            unit: name.to_string(),
            expected,
            last,
            attempts: policy.attempts.get(),
        });
    }
    tracing::debug!(unit = name, state = %expected, "unit state reached");
    Ok(())
}

/// A named smoke check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    ListMachines,
    RunService,
}

impl Check {
    pub const ALL: [Check; 2] = [Check::ListMachines, Check::RunService];

    pub fn name(self) -> &'static str {
        match self {
            Check::ListMachines => "list-machines",
            Check::RunService => "run-service",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Check::ListMachines => "fleetctl lists at least one machine",
            Check::RunService => "a unit can be started, unloaded and destroyed",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown check: {0} (expected one of: list-machines, run-service)")]
pub struct UnknownCheck(pub String);

impl FromStr for Check {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Check::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCheck(s.to_string()))
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
