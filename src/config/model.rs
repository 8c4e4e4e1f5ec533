//! Configuration, Dependency and Provide struct definitions.

use serde::{Deserialize, Deserializer, Serialize};

/// Root of an IDL dependency manifest.
///
/// Unknown fields in the YAML are ignored for forward compatibility. Missing
/// fields fall back to their zero value (empty string / empty list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Base source-control URL that dependencies inherit unless they override it.
    #[serde(deserialize_with = "null_as_default")]
    pub repository: String,

    /// Project identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Directory holding this project's IDL files.
    #[serde(deserialize_with = "null_as_default")]
    pub idl_directory: String,

    /// Artifacts this project depends on, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub dependencies: Vec<Dependency>,

    /// Interface roots this project exposes to consumers.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub provides: Vec<Provide>,
}

/// A reference to an externally versioned artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Version constraint, kept verbatim.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,

    /// Artifact kind discriminator (e.g. "proto").
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    /// Repository override. Empty means inherit from the parent configuration.
    #[serde(deserialize_with = "null_as_default")]
    pub repository: String,
}

impl Dependency {
    /// Create a dependency that inherits the configuration's repository.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind: kind.into(),
            repository: String::new(),
        }
    }

    /// Set the per-dependency repository override.
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }
}

/// An interface root this project exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provide {
    #[serde(deserialize_with = "null_as_default")]
    pub root: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    /// Reference to the ignore-pattern file applied under `root`.
    #[serde(deserialize_with = "null_as_default")]
    pub idlignore: String,
}

impl Provide {
    pub fn new(
        root: impl Into<String>,
        kind: impl Into<String>,
        idlignore: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            kind: kind.into(),
            idlignore: idlignore.into(),
        }
    }
}

/// Read an explicit YAML null (`~`, `null` or an empty value) as the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
