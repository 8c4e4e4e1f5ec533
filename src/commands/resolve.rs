//! Implementation of the `idlconf resolve` command.
//!
//! Lists every dependency with the repository it will be fetched from,
//! either as tab-separated text or as a JSON array.

use super::{emit, output_error};
use crate::cli::ResolveArgs;
use idlconf::config::Configuration;
use idlconf::error::{IdlconfError, Result};
use serde_json::{Value, json};
use std::io::Write;

/// Execute the `idlconf resolve` command.
///
/// The manifest is validated first so duplicates never reach the listing.
pub fn cmd_resolve(args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let config = Configuration::load(&args.manifest.config)?;
    config.validate()?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&resolved_json(&config))
            .map_err(|e| IdlconfError::UserError(format!("failed to render JSON: {}", e)))?;
        emit(out, &rendered)?;
        return writeln!(out).map_err(output_error);
    }

    emit(out, &resolved_text(&config))
}

/// One `name<TAB>type<TAB>version<TAB>repository` line per dependency.
fn resolved_text(config: &Configuration) -> String {
    let mut text = String::new();
    for (dep, repository) in config.resolved_dependencies() {
        text.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            dep.name, dep.kind, dep.version, repository
        ));
    }
    text
}

fn resolved_json(config: &Configuration) -> Value {
    Value::Array(
        config
            .resolved_dependencies()
            .map(|(dep, repository)| {
                json!({
                    "name": dep.name,
                    "version": dep.version,
                    "type": dep.kind,
                    "repository": repository,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ManifestArgs;
    use crate::commands::test_support::{DUPLICATE_MANIFEST, SAMPLE_MANIFEST, write_manifest};

    fn args(path: std::path::PathBuf, json: bool) -> ResolveArgs {
        ResolveArgs {
            manifest: ManifestArgs { config: path },
            json,
        }
    }

    #[test]
    fn resolve_text_inherits_and_overrides() {
        let (_dir, path) = write_manifest(SAMPLE_MANIFEST);
        let mut out = Vec::new();

        cmd_resolve(&args(path, false), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "common\tproto\t1.2.0\thttps://example.com/org\n\
             billing\tthrift\t^2.0\thttps://mirror.example.com/billing\n"
        );
    }

    #[test]
    fn resolve_json_lists_effective_repositories() {
        let (_dir, path) = write_manifest(SAMPLE_MANIFEST);
        let mut out = Vec::new();

        cmd_resolve(&args(path, true), &mut out).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            json!([
                {
                    "name": "common",
                    "version": "1.2.0",
                    "type": "proto",
                    "repository": "https://example.com/org"
                },
                {
                    "name": "billing",
                    "version": "^2.0",
                    "type": "thrift",
                    "repository": "https://mirror.example.com/billing"
                }
            ])
        );
    }

    #[test]
    fn resolve_without_dependencies_prints_nothing() {
        let (_dir, path) = write_manifest("name: lonely\n");
        let mut out = Vec::new();

        cmd_resolve(&args(path, false), &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn resolve_rejects_duplicates() {
        let (_dir, path) = write_manifest(DUPLICATE_MANIFEST);
        let mut out = Vec::new();

        let err = cmd_resolve(&args(path, true), &mut out).unwrap_err();

        assert!(matches!(err, IdlconfError::DuplicateDependency { .. }));
    }
}
