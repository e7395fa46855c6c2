//! Error types raised while parsing documents and loading studio configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validate::FailureKind;

/// Errors raised when raw input cannot be mapped onto the typed document model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("invalid value '{value}' for {field}")]
    InvalidEnumValue { field: &'static str, value: String },
    #[error("unknown document type '{0}'")]
    UnknownType(String),
    #[error("serializing schema: {0}")]
    Serialize(String),
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl SchemaError {
    /// Field-level failure this error corresponds to, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SchemaError::InvalidEnumValue { .. } => Some(FailureKind::InvalidEnumValue),
            SchemaError::UnknownType(_) | SchemaError::Serialize(_) | SchemaError::Malformed(_) => None,
        }
    }
}

/// Errors raised while reading `studio.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading studio config from '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing studio config TOML from '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid studio config: {0}")]
    Invalid(String),
}
