// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fleetcheck list`

use anyhow::Result;
use fleetcheck_core::Check;

use crate::output::{self, OutputFormat};

pub fn handle(format: OutputFormat) -> Result<()> {
    print!("{}", output::format_checks(&Check::ALL, format)?);
    Ok(())
}
