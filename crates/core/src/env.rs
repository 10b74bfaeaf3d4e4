// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the core crate.

pub const FLEETCTL_BIN_PATH: &str = "FLEETCTL_BIN_PATH";
pub const TRY_TIMES: &str = "FLEETCHECK_TRY_TIMES";
pub const TRY_INTERVAL_MS: &str = "FLEETCHECK_TRY_INTERVAL_MS";

/// Trimmed, non-empty value of `var`.
fn non_empty(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Override path to the fleetctl binary.
pub fn fleetctl_bin_path() -> Option<String> {
    non_empty(FLEETCTL_BIN_PATH)
}

/// Raw attempt count override (unparsed).
pub fn try_times() -> Option<String> {
    non_empty(TRY_TIMES)
}

/// Raw interval override in milliseconds (unparsed).
pub fn try_interval_ms() -> Option<String> {
    non_empty(TRY_INTERVAL_MS)
}
