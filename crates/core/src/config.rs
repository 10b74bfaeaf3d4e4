// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! Resolved once from the environment and then passed explicitly to
//! everything that needs it.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::env;
use crate::retry::RetryPolicy;

/// Default location of the fleetctl binary.
pub const DEFAULT_FLEETCTL_BIN_PATH: &str = "/usr/bin/fleetctl";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidAttempts { var: &'static str, value: String },
    #[error("{var} must be a non-negative integer of milliseconds, got {value:?}")]
    InvalidInterval { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the fleetctl binary under test.
    pub fleetctl: PathBuf,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fleetctl: PathBuf::from(DEFAULT_FLEETCTL_BIN_PATH),
            retry: RetryPolicy::default(),
        }
    }
}

/// Values supplied ahead of the environment, e.g. command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub fleetctl: Option<PathBuf>,
    pub attempts: Option<NonZeroU32>,
    pub interval: Option<Duration>,
}

impl Config {
    /// Resolve: environment > defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(Overrides::default())
    }

    /// Resolve: overrides > environment > defaults.
    ///
    /// An environment variable is only parsed when no override replaces it.
    pub fn from_env_with(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_values(
            overrides,
            env::fleetctl_bin_path(),
            env::try_times(),
            env::try_interval_ms(),
        )
    }

    fn from_values(
        overrides: Overrides,
        fleetctl: Option<String>,
        attempts: Option<String>,
        interval_ms: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = overrides.fleetctl.or(fleetctl.map(PathBuf::from)) {
            config.fleetctl = path;
        }
        config.retry.attempts = match (overrides.attempts, attempts) {
            (Some(n), _) => n,
            (None, Some(value)) => parse_attempts(env::TRY_TIMES, &value)?,
            (None, None) => config.retry.attempts,
        };
        config.retry.interval = match (overrides.interval, interval_ms) {
            (Some(d), _) => d,
            (None, Some(value)) => parse_interval_ms(env::TRY_INTERVAL_MS, &value)?,
            (None, None) => config.retry.interval,
        };
        Ok(config)
    }

    pub fn with_fleetctl(mut self, path: impl Into<PathBuf>) -> Self {
        self.fleetctl = path.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

pub fn parse_attempts(var: &'static str, value: &str) -> Result<NonZeroU32, ConfigError> {
    value
        .trim()
        .parse::<NonZeroU32>()
        .map_err(|_| ConfigError::InvalidAttempts {
            var,
            value: value.to_string(),
        })
}

pub fn parse_interval_ms(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidInterval {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
