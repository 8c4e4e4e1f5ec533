//! Command implementations for idlconf.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command writes its report to a caller-supplied
//! writer so tests can capture it; `dispatch` passes stdout.

mod resolve;
mod show;
mod validate;

use crate::cli::Command;
use idlconf::error::{IdlconfError, Result};
use std::io::{self, Write};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Validate(args) => validate::cmd_validate(&args, &mut out),
        Command::Resolve(args) => resolve::cmd_resolve(&args, &mut out),
        Command::Show(args) => show::cmd_show(&args, &mut out),
    }
}

/// Map a failure writing command output to a user-facing error.
fn output_error(e: io::Error) -> IdlconfError {
    IdlconfError::UserError(format!("failed to write output: {}", e))
}

/// Write a full report and flush.
fn emit(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).map_err(output_error)?;
    out.flush().map_err(output_error)
}
