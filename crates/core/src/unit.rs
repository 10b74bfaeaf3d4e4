// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit state as observed in `fleetctl list-units` output.

use std::fmt;

use serde::Serialize;

/// Sub-state marker that identifies an active unit.
const RUNNING: &str = "running";

/// Observed state of a unit in the cluster.
///
/// Matching is by substring on the plain-text listing, so any sub-state
/// other than `running` (loaded, launched, failed, ...) reads as
/// [`UnitState::Inactive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitState {
    Absent,
    Inactive,
    Active,
}

impl UnitState {
    /// Derive the state of `name` from `list-units --no-legend` output.
    ///
    /// The first line mentioning `name` decides.
    pub fn from_listing(listing: &str, name: &str) -> Self {
        match listing.lines().find(|line| line.contains(name)) {
            None => UnitState::Absent,
            Some(line) if line.contains(RUNNING) => UnitState::Active,
            Some(_) => UnitState::Inactive,
        }
    }

    pub fn exists(self) -> bool {
        self != UnitState::Absent
    }

    pub fn is_active(self) -> bool {
        self == UnitState::Active
    }
}

impl fmt::Display for UnitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnitState::Absent => "absent",
            UnitState::Inactive => "inactive",
            UnitState::Active => "active",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
