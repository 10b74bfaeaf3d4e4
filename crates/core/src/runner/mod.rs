// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution

mod system;

#[cfg(any(test, feature = "test-support"))]
mod fake;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use system::SystemRunner;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunner, RunnerCall};

/// Captured result of one completed invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when terminated by a signal.
    pub status: Option<i32>,
}

/// Errors from running a subprocess
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch {}: {source}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "{} {} exited with {}\nstdout: {stdout}\nstderr: {stderr}",
        .program.display(),
        .args.join(" "),
        fmt_status(.status)
    )]
    Exit {
        program: PathBuf,
        args: Vec<String>,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl RunError {
    /// Captured stdout, empty when the program never started.
    pub fn stdout(&self) -> &str {
        match self {
            RunError::Launch { .. } => "",
            RunError::Exit { stdout, .. } => stdout,
        }
    }

    /// Captured stderr, empty when the program never started.
    pub fn stderr(&self) -> &str {
        match self {
            RunError::Launch { .. } => "",
            RunError::Exit { stderr, .. } => stderr,
        }
    }
}

fn fmt_status(status: &Option<i32>) -> String {
    match *status {
        Some(code) => format!("exit code {}", code),
        None => "signal".to_string(),
    }
}

/// Runs a program to completion and captures its output.
///
/// A non-zero exit is an error, and the error carries the full captured
/// buffers.
pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<Invocation, RunError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &Path, args: &[&str]) -> Result<Invocation, RunError> {
        (**self).run(program, args)
    }
}
