// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fleetcheck machines`: print what fleetctl reports.

use anyhow::Result;
use fleetcheck_core::{Config, Fleetctl, SystemRunner};

use crate::output::{self, OutputFormat};

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let fleet = Fleetctl::new(&config.fleetctl, SystemRunner);
    let machines = fleet.list_machines()?;
    print!("{}", output::format_machines(&machines, format)?);
    Ok(())
}
