//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving fleetctl and waiting on the cluster.
//! When `FLEETCTL_BIN_PATH` is set the specs run against that binary and
//! its cluster; otherwise each test gets its own scripted fake fleetctl.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fleetcheck_core::test_support::FakeFleetctl;
pub use fleetcheck_core::{
    CommandRunner, Fleetctl, Invocation, RetryPolicy, RunError, SystemRunner, UnitState,
};

pub use fleetcheck_core::{
    checks, Check, CheckError, DestroyOnDrop, Suite, ThreadSleeper, UnitFile, HELLO_SERVICE,
};

// Against a real cluster: the convergence budget fleet needs.
pub const LIVE_TRY_TIMES: u32 = 5;
pub const LIVE_TRY_INTERVAL_MS: u64 = 1000;

// Against the fake: aggressive polling for fast tests.
pub const SPEC_TRY_TIMES: u32 = 5;
pub const SPEC_POLL_INTERVAL_MS: u64 = 10;

/// The fleetctl under test.
pub enum Cluster {
    Live(PathBuf),
    Fake(FakeFleetctl),
}

impl Cluster {
    /// Live cluster when `FLEETCTL_BIN_PATH` is set, fake otherwise.
    pub fn from_env() -> Self {
        match std::env::var("FLEETCTL_BIN_PATH") {
            Ok(path) if !path.trim().is_empty() => Cluster::Live(PathBuf::from(path.trim())),
            _ => Self::fake(),
        }
    }

    /// Always a fresh fake, for specs that inject faults.
    pub fn fake() -> Self {
        Cluster::Fake(FakeFleetctl::new().expect("fake fleetctl should install"))
    }

    pub fn bin(&self) -> &Path {
        match self {
            Cluster::Live(path) => path,
            Cluster::Fake(fake) => fake.bin(),
        }
    }

    /// The fake, for fault injection. Panics on a live cluster.
    pub fn faked(&self) -> &FakeFleetctl {
        match self {
            Cluster::Fake(fake) => fake,
            Cluster::Live(_) => panic!("spec requires the fake fleetctl"),
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        let (times, ms) = match self {
            Cluster::Live(_) => (LIVE_TRY_TIMES, LIVE_TRY_INTERVAL_MS),
            Cluster::Fake(_) => (SPEC_TRY_TIMES, SPEC_POLL_INTERVAL_MS),
        };
        RetryPolicy::new(NonZeroU32::new(times).unwrap(), Duration::from_millis(ms))
    }

    pub fn client(&self) -> Fleetctl<SystemRunner> {
        Fleetctl::new(self.bin(), SystemRunner)
    }

    /// Build a fleetctl invocation.
    pub fn fleetctl(&self) -> FleetctlBuilder {
        FleetctlBuilder {
            bin: self.bin().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Observed state of `name`, failing the test if list-units fails.
    pub fn unit_state(&self, name: &str) -> UnitState {
        let listing = self
            .fleetctl()
            .args(&["list-units", "--no-legend"])
            .passes()
            .stdout();
        UnitState::from_listing(&listing, name)
    }

    /// Poll until `name` is observed in `expected` state.
    pub fn wait_for_unit(&self, name: &str, expected: UnitState) -> bool {
        self.policy()
            .poll(ThreadSleeper, || self.unit_state(name) == expected)
    }
}

/// fleetctl invocation builder for fluent test assertions
pub struct FleetctlBuilder {
    bin: PathBuf,
    args: Vec<String>,
}

impl FleetctlBuilder {
    /// Add arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Add a path argument
    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.to_string_lossy().into_owned());
        self
    }

    fn run(&self) -> Result<Invocation, RunError> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        SystemRunner.run(&self.bin, &args)
    }

    /// Run and expect success
    pub fn passes(self) -> RunAssert {
        match self.run() {
            Ok(invocation) => RunAssert { invocation },
            Err(e) => panic!(
                "fleetctl {} failed with error: {}",
                self.args.join(" "),
                e
            ),
        }
    }

    /// Run and expect failure
    pub fn fails(self) -> RunError {
        match self.run() {
            Ok(invocation) => panic!(
                "expected fleetctl {} to fail, but it passed\nstdout: {}\nstderr: {}",
                self.args.join(" "),
                invocation.stdout,
                invocation.stderr
            ),
            Err(e) => e,
        }
    }
}

/// Result of a fleetctl run for chaining assertions
pub struct RunAssert {
    invocation: Invocation,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        self.invocation.stdout.clone()
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.invocation.stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            self.invocation.stdout
        );
        self
    }
}
