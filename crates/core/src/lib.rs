// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! fleetcheck-core: smoke checks for a fleet cluster, driven through fleetctl

pub mod checks;
pub mod config;
mod env;
pub mod fleetctl;
pub mod retry;
pub mod runner;
pub mod sleep;
pub mod suite;
pub mod unit;
pub mod unit_file;

pub use checks::{Check, CheckError, UnknownCheck, DEFAULT_UNIT_NAME};
pub use config::{Config, ConfigError, Overrides, DEFAULT_FLEETCTL_BIN_PATH};
pub use fleetctl::Fleetctl;
pub use retry::{poll, poll_with, RetryPolicy};
pub use runner::{CommandRunner, Invocation, RunError, SystemRunner};
pub use sleep::{Sleeper, ThreadSleeper};
pub use suite::{Outcome, Report, Suite};
pub use unit::UnitState;
pub use unit_file::{DestroyOnDrop, UnitFile, HELLO_SERVICE};

// Test support - only compiled for tests or when explicitly requested
#[cfg(all(unix, any(test, feature = "test-support")))]
pub mod test_support;

#[cfg(any(test, feature = "test-support"))]
pub use runner::{FakeRunner, RunnerCall};
#[cfg(any(test, feature = "test-support"))]
pub use sleep::FakeSleeper;
