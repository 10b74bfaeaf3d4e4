// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Muted / secondary text: darker grey
    pub const MUTED: u8 = 240;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

const RESET: &str = "\x1b[0m";

/// Format text with the muted color (darker grey).
pub fn muted(text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{}m{}{}", codes::MUTED, text, RESET)
    } else {
        text.to_string()
    }
}

/// Colorize a check verdict: `PASS` green, `FAIL` red.
pub fn verdict(passed: bool) -> String {
    let (code, text) = if passed {
        ("\x1b[32m", "PASS")
    } else {
        ("\x1b[31m", "FAIL")
    };
    if !should_colorize() {
        return text.to_string();
    }
    format!("{code}{text}{RESET}")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
