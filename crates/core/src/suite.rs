// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential runner for smoke checks.
//!
//! Checks run one at a time in the order given. A failing check is recorded
//! and never stops the checks after it.

use std::time::Instant;

use serde::Serialize;

use crate::checks::{self, Check, CheckError, DEFAULT_UNIT_NAME};
use crate::fleetctl::Fleetctl;
use crate::retry::RetryPolicy;
use crate::runner::CommandRunner;
use crate::sleep::Sleeper;

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub check: Check,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// Results of a suite run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// True when every check passed. An empty report passes.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

pub struct Suite<'a, R, S> {
    fleet: &'a Fleetctl<R>,
    sleeper: S,
    policy: RetryPolicy,
    unit_name: String,
}

impl<'a, R: CommandRunner, S: Sleeper> Suite<'a, R, S> {
    pub fn new(fleet: &'a Fleetctl<R>, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            fleet,
            sleeper,
            policy,
            unit_name: DEFAULT_UNIT_NAME.to_string(),
        }
    }

    /// Unit name used by [`Check::RunService`].
    pub fn with_unit_name(mut self, name: impl Into<String>) -> Self {
        self.unit_name = name.into();
        self
    }

    pub fn run_check(&self, check: Check) -> Result<(), CheckError> {
        match check {
            Check::ListMachines => checks::list_machines(self.fleet).map(|_| ()),
            Check::RunService => {
                checks::run_service(self.fleet, &self.sleeper, &self.policy, &self.unit_name)
            }
        }
    }

    pub fn run(&self, checks: &[Check]) -> Report {
        let mut report = Report::default();
        for &check in checks {
            tracing::info!(%check, "running check");
            let start = Instant::now();
            let result = self.run_check(check);
            let elapsed_ms = start.elapsed().as_millis() as u64;

            let error = match result {
                Ok(()) => {
                    tracing::info!(%check, elapsed_ms, "check passed");
                    None
                }
                Err(e) => {
                    tracing::error!(%check, elapsed_ms, error = %e, "check failed");
                    Some(e.to_string())
                }
            };
            report.outcomes.push(Outcome {
                check,
                passed: error.is_none(),
                error,
                elapsed_ms,
            });
        }
        report
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
