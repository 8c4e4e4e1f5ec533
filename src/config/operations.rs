//! Encode, decode, repository resolution and validation.

use super::model::{Configuration, Dependency};
use crate::error::{IdlconfError, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

impl Configuration {
    /// Write the configuration as YAML to `writer`.
    ///
    /// Empty `dependencies` and `provides` are omitted. The writer is flushed
    /// before returning; a flush failure is reported as an encode error.
    pub fn encode<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_yaml::to_writer(&mut writer, self).map_err(IdlconfError::encode)?;
        writer.flush().map_err(IdlconfError::encode)?;

        tracing::debug!(
            name = %self.name,
            dependencies = self.dependencies.len(),
            provides = self.provides.len(),
            "encoded configuration"
        );
        Ok(())
    }

    /// Decode a configuration from `reader`.
    ///
    /// Unknown fields are silently ignored for forward compatibility. Only the
    /// first document of a multi-document stream is read; an empty stream
    /// yields the zero-value configuration.
    pub fn decode<R: Read>(reader: R) -> Result<Self> {
        let config = match serde_yaml::Deserializer::from_reader(reader).next() {
            Some(document) => {
                Configuration::deserialize(document).map_err(IdlconfError::Decode)?
            }
            None => Configuration::default(),
        };

        tracing::debug!(
            name = %config.name,
            dependencies = config.dependencies.len(),
            provides = config.provides.len(),
            "decoded configuration"
        );
        Ok(config)
    }

    /// Decode from `reader` and replace `self` with the result.
    ///
    /// Fields absent from the document end up at their zero value; nothing is
    /// merged from the previous contents. On error `self` is left unchanged.
    pub fn decode_into<R: Read>(&mut self, reader: R) -> Result<()> {
        *self = Self::decode(reader)?;
        Ok(())
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::decode(yaml.as_bytes())
    }

    /// Serialize the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        String::from_utf8(buf).map_err(IdlconfError::encode)
    }

    /// Load a configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Configuration)` - Successfully decoded (not yet validated)
    /// * `Err(IdlconfError::UserError)` - The file could not be opened
    /// * `Err(IdlconfError::Decode)` - The file is not a valid manifest
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            IdlconfError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::decode(BufReader::new(file))
    }

    /// Effective repository for `dependency`: its own override when non-empty,
    /// otherwise this configuration's repository.
    pub fn resolve_repository<'a>(&'a self, dependency: &'a Dependency) -> &'a str {
        if dependency.repository.is_empty() {
            &self.repository
        } else {
            &dependency.repository
        }
    }

    /// Dependencies paired with their effective repository, in stored order.
    pub fn resolved_dependencies(&self) -> impl Iterator<Item = (&Dependency, &str)> {
        self.dependencies
            .iter()
            .map(move |dep| (dep, self.resolve_repository(dep)))
    }

    /// Check that no two dependencies share both name and type.
    ///
    /// Stops at the first duplicate in declaration order.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, HashSet<&str>> = HashMap::new();

        for dep in &self.dependencies {
            let kinds = seen.entry(dep.name.as_str()).or_default();
            if !kinds.insert(dep.kind.as_str()) {
                tracing::warn!(name = %dep.name, kind = %dep.kind, "duplicate dependency");
                return Err(IdlconfError::DuplicateDependency {
                    name: dep.name.clone(),
                    kind: dep.kind.clone(),
                });
            }
        }

        tracing::debug!(
            dependencies = self.dependencies.len(),
            "configuration validated"
        );
        Ok(())
    }
}
