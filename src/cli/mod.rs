//! CLI argument parsing for idlconf.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use idlconf::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// idlconf: inspect and validate IDL dependency manifests.
///
/// A manifest declares the project's base repository, the IDL artifacts it
/// depends on, and the interface roots it provides to consumers.
#[derive(Parser, Debug)]
#[command(name = "idlconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit debug logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for idlconf.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a manifest for decode errors and duplicate dependencies.
    Validate(ManifestArgs),

    /// List each dependency with its effective repository.
    ///
    /// A dependency without its own `repository` inherits the manifest's.
    Resolve(ResolveArgs),

    /// Print the manifest in canonical form.
    ///
    /// Unknown keys are dropped and empty lists omitted.
    Show(ManifestArgs),
}

/// Arguments shared by commands that read a single manifest.
#[derive(Parser, Debug)]
pub struct ManifestArgs {
    /// Path to the manifest.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Print a JSON array instead of tab-separated lines.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validate_defaults_config_path() {
        let cli = Cli::parse_from(["idlconf", "validate"]);
        assert!(!cli.verbose);
        match cli.command {
            Command::Validate(args) => assert_eq!(args.config, PathBuf::from("idl.yaml")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_resolve_with_json_and_config() {
        let cli = Cli::parse_from(["idlconf", "resolve", "--json", "-c", "deps/idl.yaml"]);
        match cli.command {
            Command::Resolve(args) => {
                assert!(args.json);
                assert_eq!(args.manifest.config, PathBuf::from("deps/idl.yaml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["idlconf", "show", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Show(_)));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["idlconf"]).is_err());
    }
}
