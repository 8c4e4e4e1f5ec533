//! Implementation of the `idlconf show` command.

use crate::cli::ManifestArgs;
use idlconf::config::Configuration;
use idlconf::error::Result;
use std::io::Write;

/// Execute the `idlconf show` command.
///
/// Decodes and validates the manifest, then re-encodes it to `out`. The
/// output drops unknown keys and empty lists, so it doubles as a formatter.
pub fn cmd_show(args: &ManifestArgs, out: &mut impl Write) -> Result<()> {
    let config = Configuration::load(&args.config)?;
    config.validate()?;
    config.encode(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{SAMPLE_MANIFEST, write_manifest};

    #[test]
    fn show_output_round_trips() {
        let (_dir, path) = write_manifest(SAMPLE_MANIFEST);
        let mut out = Vec::new();

        cmd_show(&ManifestArgs { config: path.clone() }, &mut out).unwrap();

        let reparsed = Configuration::decode(out.as_slice()).unwrap();
        assert_eq!(reparsed, Configuration::load(&path).unwrap());
    }

    #[test]
    fn show_drops_unknown_keys_and_empty_lists() {
        let (_dir, path) = write_manifest("name: tidy\nfoo: bar\ndependencies: []\n");
        let mut out = Vec::new();

        cmd_show(&ManifestArgs { config: path }, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("name: tidy"));
        assert!(!text.contains("foo"));
        assert!(!text.contains("dependencies"));
    }
}
