// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted fleetctl stand-in for tests across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.
#![cfg_attr(coverage_nightly, coverage(off))]

use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A machine line as printed by `list-machines --no-legend`.
pub const FAKE_MACHINE: &str = "2c9f1e8a...\t10.0.0.1\t-";

// State lives in files under @STATE@:
//   machines       list-machines output
//   delay          list-units calls before a requested state shows
//   fail-<cmd>     if present, <cmd> prints this to stderr and exits 1
//   calls          one line per invocation
//   units/<name>   "<shown> <target> <remaining>"
const SCRIPT: &str = r#"#!/bin/sh
state='@STATE@'
echo "$*" >> "$state/calls"

cmd="$1"
[ $# -gt 0 ] && shift
while [ $# -gt 0 ]; do
    case "$1" in
        --*) shift ;;
        *) break ;;
    esac
done
arg="$1"

if [ -f "$state/fail-$cmd" ]; then
    cat "$state/fail-$cmd" >&2
    exit 1
fi

delay=$(cat "$state/delay")

request() {
    unit="$state/units/${1##*/}"
    if [ -f "$unit" ]; then
        read -r shown target left < "$unit"
    else
        shown=absent
    fi
    echo "$shown $2 $delay" > "$unit"
}

case "$cmd" in
    list-machines)
        cat "$state/machines"
        ;;
    list-units)
        for unit in "$state"/units/*; do
            [ -f "$unit" ] || continue
            read -r shown target left < "$unit"
            if [ "$left" -gt 0 ]; then
                left=$((left - 1))
            else
                shown="$target"
            fi
            if [ "$shown" = absent ] && [ "$target" = absent ]; then
                rm -f "$unit"
                continue
            fi
            echo "$shown $target $left" > "$unit"
            name="${unit##*/}"
            case "$shown" in
                running) printf '%s\t%s\t%s\t%s\n' "$name" "2c9f1e8a.../10.0.0.1" active running ;;
                dead) printf '%s\t%s\t%s\t%s\n' "$name" "-" inactive dead ;;
            esac
        done
        ;;
    start)
        request "$arg" running
        echo "Triggered unit ${arg##*/} start"
        ;;
    unload)
        request "$arg" dead
        echo "Triggered unit ${arg##*/} unload"
        ;;
    destroy)
        if [ -f "$state/units/${arg##*/}" ]; then
            request "$arg" absent
            echo "Destroyed ${arg##*/}"
        fi
        ;;
    *)
        echo "Unknown command: $cmd" >&2
        exit 1
        ;;
esac
"#;

/// Executable shell script that behaves like a small fleet cluster.
///
/// Units requested with `start`, `unload` or `destroy` reach their new
/// state after [`FakeFleetctl::set_delay`] `list-units` calls.
pub struct FakeFleetctl {
    dir: TempDir,
    bin: PathBuf,
}

impl FakeFleetctl {
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("fake-fleet-").tempdir()?;
        let state = dir.path().join("state");
        std::fs::create_dir_all(state.join("units"))?;
        std::fs::write(state.join("machines"), format!("{}\n", FAKE_MACHINE))?;
        std::fs::write(state.join("delay"), "0\n")?;
        std::fs::write(state.join("calls"), "")?;

        let bin = dir.path().join("fleetctl");
        let script = SCRIPT.replace("@STATE@", &state.to_string_lossy());
        std::fs::write(&bin, script)?;
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755))?;

        Ok(Self { dir, bin })
    }

    /// Path to the executable.
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    fn state(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    /// Replace the `list-machines` output.
    pub fn set_machines(&self, lines: &[&str]) -> io::Result<()> {
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        std::fs::write(self.state().join("machines"), out)
    }

    /// Number of `list-units` calls before a requested state shows.
    pub fn set_delay(&self, list_calls: u32) -> io::Result<()> {
        std::fs::write(self.state().join("delay"), format!("{}\n", list_calls))
    }

    /// Make `subcommand` exit 1 with `stderr`.
    pub fn fail(&self, subcommand: &str, stderr: &str) -> io::Result<()> {
        std::fs::write(self.state().join(format!("fail-{}", subcommand)), stderr)
    }

    /// Every invocation so far, arguments space-joined.
    pub fn calls(&self) -> io::Result<Vec<String>> {
        let calls = std::fs::read_to_string(self.state().join("calls"))?;
        Ok(calls.lines().map(str::to_string).collect())
    }

    /// Names of units the fake cluster still knows about.
    pub fn units(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(self.state().join("units"))? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
#[path = "test_support_tests.rs"]
mod tests;
