// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sleeping abstraction so polling can be tested without real time passing.

use std::time::Duration;

#[cfg(any(test, feature = "test-support"))]
use parking_lot::Mutex;
#[cfg(any(test, feature = "test-support"))]
use std::sync::Arc;

/// Blocks the calling thread for a duration.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Real sleeper backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        std::thread::sleep(duration);
    }
}

/// Sleeper that returns immediately and records every requested duration.
///
/// Clones share the same record.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FakeSleeper {
    calls: Arc<Mutex<Vec<Duration>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `sleep` was called.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Sum of all requested durations.
    pub fn total(&self) -> Duration {
        self.calls.lock().iter().sum()
    }

    /// Every requested duration, in call order.
    pub fn calls(&self) -> Vec<Duration> {
        self.calls.lock().clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Sleeper for FakeSleeper {
    fn sleep(&self, duration: Duration) {
        self.calls.lock().push(duration);
    }
}

#[cfg(test)]
#[path = "sleep_tests.rs"]
mod tests;
