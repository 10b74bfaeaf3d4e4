// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped resources for staging a unit in the cluster.
//!
//! [`UnitFile`] owns a temporary unit file; [`DestroyOnDrop`] owns the
//! cluster-side unit created from it. Both release on drop, on every exit
//! path, and never fail the caller while doing so.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fleetctl::Fleetctl;
use crate::runner::CommandRunner;

/// Unit file that prints a greeting every second, forever.
pub const HELLO_SERVICE: &str = r#"[Unit]
Description=Hello World
[Service]
ExecStart=/bin/bash -c "while true; do echo \"Hello, world\"; sleep 1; done"
"#;

/// A unit file written into a private temporary directory.
///
/// The file name is exactly the unit name, since fleet derives the unit
/// name from it. The name must be a single path component so the file stays
/// inside the directory removed on drop.
#[derive(Debug)]
pub struct UnitFile {
    name: String,
    path: PathBuf,
    dir: Option<TempDir>,
}

impl UnitFile {
    pub fn create(name: &str, contents: &str) -> io::Result<Self> {
        if Path::new(name).file_name() != Some(OsStr::new(name)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unit name {:?} is not a plain file name", name),
            ));
        }
        let dir = tempfile::Builder::new().prefix("fleetcheck-").tempdir()?;
        let path = dir.path().join(name);
        std::fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "wrote unit file");
        Ok(Self {
            name: name.to_string(),
            path,
            dir: Some(dir),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for UnitFile {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let shown = dir.path().display().to_string();
            if let Err(e) = dir.close() {
                tracing::warn!(dir = %shown, error = %e, "failed to remove unit file");
            }
        }
    }
}

/// Destroys a unit in the cluster when dropped, ignoring the outcome.
///
/// Declare after the [`UnitFile`] it was created from so it drops first.
pub struct DestroyOnDrop<'a, R: CommandRunner> {
    fleet: &'a Fleetctl<R>,
    target: String,
}

impl<'a, R: CommandRunner> DestroyOnDrop<'a, R> {
    pub fn new(fleet: &'a Fleetctl<R>, target: impl Into<String>) -> Self {
        Self {
            fleet,
            target: target.into(),
        }
    }
}

impl<R: CommandRunner> Drop for DestroyOnDrop<'_, R> {
    fn drop(&mut self) {
        if let Err(e) = self.fleet.destroy(&self.target) {
            // Expected when the unit was already destroyed.
            tracing::debug!(unit = %self.target, error = %e, "cleanup destroy failed");
        }
    }
}

#[cfg(test)]
#[path = "unit_file_tests.rs"]
mod tests;
