//! Configuration model for idlconf.
//!
//! This module defines the `Configuration` struct that represents an IDL
//! dependency manifest (`idl.yaml`). It supports forward-compatible YAML
//! parsing (unknown fields are ignored), zero-value defaults for missing
//! fields, per-dependency repository resolution, and validation that no
//! two dependencies share both name and type.

mod model;
mod operations;


// Re-export public API
pub use model::{Configuration, Dependency, Provide};

/// Manifest filename the CLI reads when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "idl.yaml";
