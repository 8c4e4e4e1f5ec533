//! Implementation of the `idlconf validate` command.

use super::emit;
use crate::cli::ManifestArgs;
use idlconf::config::Configuration;
use idlconf::error::Result;
use std::io::Write;

/// Execute the `idlconf validate` command.
///
/// Decodes the manifest and checks it for duplicate dependencies. Prints a
/// one-line summary on success; failures propagate with their exit code.
pub fn cmd_validate(args: &ManifestArgs, out: &mut impl Write) -> Result<()> {
    let config = Configuration::load(&args.config)?;
    config.validate()?;

    emit(
        out,
        &format!(
            "OK: {} dependencies, {} provides\n",
            config.dependencies.len(),
            config.provides.len()
        ),
    )
}
