//! idlconf: configuration model for IDL dependency manifests.
//!
//! A manifest names the project, the base repository its dependencies are
//! fetched from, the IDL artifacts it depends on and the interface roots it
//! provides. This crate only models, encodes, decodes and validates that
//! document; resolving and fetching dependencies is left to callers.

pub mod config;
pub mod error;
pub mod exit_codes;

pub use config::{Configuration, Dependency, Provide};
pub use error::{IdlconfError, Result};
