//! Error types for idlconf.
//!
//! Uses thiserror for derive macros. Nothing in the library treats an error as
//! fatal; the binary maps each variant to an exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for idlconf operations.
#[derive(Error, Debug)]
pub enum IdlconfError {
    /// Writing the configuration failed, either in the YAML encoder or while
    /// flushing the underlying writer.
    #[error("failed to encode configuration: {source}")]
    Encode {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The input was not well-formed YAML or did not match the schema.
    #[error("failed to decode configuration: {0}")]
    Decode(#[source] serde_yaml::Error),

    /// Two dependencies share both name and type.
    #[error("the dependency '{name}' with type '{kind}' has more than one entry")]
    DuplicateDependency { name: String, kind: String },

    /// User provided invalid arguments or an unusable path.
    #[error("{0}")]
    UserError(String),
}

impl IdlconfError {
    pub(crate) fn encode(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        IdlconfError::Encode {
            source: source.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            IdlconfError::Encode { .. } => exit_codes::ENCODE_FAILURE,
            IdlconfError::Decode(_) => exit_codes::USER_ERROR,
            IdlconfError::DuplicateDependency { .. } => exit_codes::VALIDATION_FAILURE,
            IdlconfError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for idlconf operations.
pub type Result<T> = std::result::Result<T, IdlconfError>;
