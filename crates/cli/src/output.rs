// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use fleetcheck_core::{Check, Report};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a duration in milliseconds ("850ms", "4.2s").
pub fn format_elapsed_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

/// Render a suite report.
pub fn format_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)? + "\n");
    }

    let width = report
        .outcomes
        .iter()
        .map(|o| o.check.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for outcome in &report.outcomes {
        out.push_str(&format!(
            "{}  {:<width$}  {}\n",
            color::verdict(outcome.passed),
            outcome.check.name(),
            color::muted(&format!("({})", format_elapsed_ms(outcome.elapsed_ms))),
        ));
        if let Some(error) = &outcome.error {
            for line in error.lines() {
                out.push_str(&format!("      {}\n", line));
            }
        }
    }

    let failed = report.failures().count();
    let passed = report.outcomes.len() - failed;
    out.push_str(&format!("\n{} passed, {} failed\n", passed, failed));
    Ok(out)
}

/// Render the list of available checks.
pub fn format_checks(checks: &[Check], format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        let entries: Vec<_> = checks
            .iter()
            .map(|c| serde_json::json!({ "name": c.name(), "description": c.description() }))
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)? + "\n");
    }

    let width = checks.iter().map(|c| c.name().len()).max().unwrap_or(0);
    Ok(checks
        .iter()
        .map(|c| format!("{:<width$}  {}\n", c.name(), c.description()))
        .collect())
}

/// Render machine lines from `list-machines`.
pub fn format_machines(machines: &[String], format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(machines)? + "\n");
    }
    Ok(machines.iter().map(|m| format!("{}\n", m)).collect())
}
