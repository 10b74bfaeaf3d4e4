// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::{Duration, Instant};

use super::*;

#[test]
fn thread_sleeper_zero_returns_immediately() {
    let start = Instant::now();
    ThreadSleeper.sleep(Duration::ZERO);
    assert!(start.elapsed() < Duration::from_millis(50));
}

#[test]
fn thread_sleeper_blocks_for_duration() {
    let start = Instant::now();
    ThreadSleeper.sleep(Duration::from_millis(20));
    assert!(start.elapsed() >= Duration::from_millis(20));
}

#[test]
fn fake_sleeper_records_calls() {
    let sleeper = FakeSleeper::new();
    sleeper.sleep(Duration::from_millis(10));
    sleeper.sleep(Duration::from_millis(30));

    assert_eq!(sleeper.count(), 2);
    assert_eq!(sleeper.total(), Duration::from_millis(40));
    assert_eq!(
        sleeper.calls(),
        vec![Duration::from_millis(10), Duration::from_millis(30)]
    );
}

#[test]
fn fake_sleeper_clones_share_record() {
    let sleeper = FakeSleeper::new();
    let clone = sleeper.clone();
    clone.sleep(Duration::from_secs(1));
    assert_eq!(sleeper.count(), 1);
}

#[test]
fn sleeper_by_reference() {
    fn nap(s: impl Sleeper) {
        s.sleep(Duration::from_secs(2));
    }
    let sleeper = FakeSleeper::new();
    nap(&sleeper);
    assert_eq!(sleeper.total(), Duration::from_secs(2));
}
