// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake command runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CommandRunner, Invocation, RunError};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded runner call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCall {
    pub program: PathBuf,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Ok(String),
    Fail { status: i32, stderr: String },
}

#[derive(Default)]
struct FakeRunnerState {
    /// Keyed by the space-joined argument list.
    responses: HashMap<String, VecDeque<Scripted>>,
    calls: Vec<RunnerCall>,
}

/// Fake runner returning scripted output per argument list.
///
/// Each argument list has a queue of responses; the last response repeats
/// once the queue is drained. A call with no exact script uses the longest
/// scripted argument list that prefixes it. Anything else succeeds with
/// empty output.
#[derive(Clone, Default)]
pub struct FakeRunner {
    inner: Arc<Mutex<FakeRunnerState>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response with `stdout`.
    pub fn respond(&self, args: &[&str], stdout: impl Into<String>) -> &Self {
        self.push(args, Scripted::Ok(stdout.into()))
    }

    /// Queue a failing response.
    pub fn fail(&self, args: &[&str], status: i32, stderr: impl Into<String>) -> &Self {
        self.push(
            args,
            Scripted::Fail {
                status,
                stderr: stderr.into(),
            },
        )
    }

    fn push(&self, args: &[&str], response: Scripted) -> &Self {
        self.inner
            .lock()
            .responses
            .entry(args.join(" "))
            .or_default()
            .push_back(response);
        self
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<RunnerCall> {
        self.inner.lock().calls.clone()
    }

    /// Argument lists of all calls so far, space-joined.
    pub fn commands(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .map(|c| c.args.join(" "))
            .collect()
    }

    /// Number of calls whose arguments start with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.commands()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<Invocation, RunError> {
        let key = args.join(" ");
        let mut inner = self.inner.lock();
        inner.calls.push(RunnerCall {
            program: program.to_path_buf(),
            args: args.iter().map(|s| s.to_string()).collect(),
        });

        let scripted = if inner.responses.contains_key(&key) {
            Some(key)
        } else {
            inner
                .responses
                .keys()
                .filter(|k| key.starts_with(&format!("{} ", k)))
                .max_by_key(|k| k.len())
                .cloned()
        };

        let response = match scripted.and_then(|k| inner.responses.get_mut(&k)) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match response {
            None => Ok(Invocation {
                status: Some(0),
                ..Invocation::default()
            }),
            Some(Scripted::Ok(stdout)) => Ok(Invocation {
                stdout,
                stderr: String::new(),
                status: Some(0),
            }),
            Some(Scripted::Fail { status, stderr }) => Err(RunError::Exit {
                program: program.to_path_buf(),
                args: args.iter().map(|s| s.to_string()).collect(),
                status: Some(status),
                stdout: String::new(),
                stderr,
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
