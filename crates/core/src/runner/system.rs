// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;
use std::process::{Command, Stdio};

use super::{CommandRunner, Invocation, RunError};

/// Runner that spawns real processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<Invocation, RunError> {
        tracing::debug!(program = %program.display(), ?args, "running");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunError::Launch {
                program: program.to_path_buf(),
                source,
            })?;

        let invocation = Invocation {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        };

        if !output.status.success() {
            tracing::debug!(
                program = %program.display(),
                status = ?invocation.status,
                "command failed"
            );
            return Err(RunError::Exit {
                program: program.to_path_buf(),
                args: args.iter().map(|s| s.to_string()).collect(),
                status: invocation.status,
                stdout: invocation.stdout,
                stderr: invocation.stderr,
            });
        }

        Ok(invocation)
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
