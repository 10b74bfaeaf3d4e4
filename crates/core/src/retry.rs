// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-interval condition polling.
//!
//! Waits for a condition in the system under test to become true, tolerating
//! convergence delay. The predicate is evaluated immediately; between failed
//! evaluations the poller sleeps a fixed interval. No sleep follows the last
//! attempt, so `n` attempts cost at most `n - 1` sleeps.

use std::num::NonZeroU32;
use std::time::Duration;

use crate::sleep::{Sleeper, ThreadSleeper};

/// Default number of attempts.
pub const DEFAULT_ATTEMPTS: NonZeroU32 = NonZeroU32::MIN.saturating_add(4);

/// Default wait between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Attempt budget and interval, fixed for the duration of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: NonZeroU32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: NonZeroU32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Poll `predicate` under this policy. See [`poll_with`].
    pub fn poll<S, F>(&self, sleeper: S, predicate: F) -> bool
    where
        S: Sleeper,
        F: FnMut() -> bool,
    {
        poll_with(sleeper, predicate, self.attempts, self.interval)
    }

    /// Upper bound on the time spent sleeping when every attempt fails.
    pub fn max_wait(&self) -> Duration {
        self.interval.saturating_mul(self.attempts.get() - 1)
    }
}

/// Poll `predicate` with real sleeping between attempts.
pub fn poll<F>(predicate: F, attempts: NonZeroU32, interval: Duration) -> bool
where
    F: FnMut() -> bool,
{
    poll_with(ThreadSleeper, predicate, attempts, interval)
}

/// Poll `predicate` up to `attempts` times, sleeping `interval` via `sleeper`
/// between attempts.
///
/// Returns `true` as soon as the predicate returns `true`, without a further
/// sleep. Returns `false` once the attempts are exhausted.
pub fn poll_with<S, F>(sleeper: S, mut predicate: F, attempts: NonZeroU32, interval: Duration) -> bool
where
    S: Sleeper,
    F: FnMut() -> bool,
{
    let attempts = attempts.get();
    for attempt in 1..=attempts {
        if predicate() {
            tracing::trace!(attempt, attempts, "condition reached");
            return true;
        }
        tracing::trace!(attempt, attempts, "condition not reached");
        if attempt < attempts {
            sleeper.sleep(interval);
        }
    }
    tracing::debug!(attempts, ?interval, "condition not reached, attempts exhausted");
    false
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
