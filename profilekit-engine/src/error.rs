//! Error types for the profile engine.

use profilekit_codec::CodecError;
use profilekit_model::{BindingError, CatalogError};
use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that abort a save, load or clear.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be created, read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The host type's field table is unusable.
    #[error(transparent)]
    Introspection(#[from] CatalogError),

    /// A field accessor could not be invoked during save.
    #[error("cannot read field {field}: {source}")]
    Access {
        field: String,
        #[source]
        source: BindingError,
    },

    /// A field's category has no codec or default value.
    #[error("unsupported field type {kind} for field {field}")]
    UnsupportedType { field: String, kind: String },

    /// A field name contains the record separator and cannot be written.
    #[error("field name {field} contains the record separator {separator:?}")]
    ReservedSeparator { field: String, separator: char },

    /// The save destination was rejected before any file was touched.
    #[error("invalid profile location: {0}")]
    InvalidLocation(String),

    /// The engine configuration is unusable.
    #[error("invalid profile configuration: {0}")]
    InvalidConfig(String),
}

impl ProfileError {
    pub(crate) fn from_binding(field: &str, err: BindingError) -> Self {
        match err {
            BindingError::Unsupported { kind, .. } => Self::UnsupportedType {
                field: field.to_string(),
                kind,
            },
            source => Self::Access {
                field: field.to_string(),
                source,
            },
        }
    }

    pub(crate) fn from_codec(field: &str, err: CodecError) -> Self {
        match err {
            CodecError::UnsupportedType(kind) => Self::UnsupportedType {
                field: field.to_string(),
                kind,
            },
            CodecError::CategoryMismatch { expected, found } => Self::Access {
                field: field.to_string(),
                source: BindingError::CategoryMismatch {
                    field: field.to_string(),
                    expected,
                    found,
                },
            },
        }
    }
}

/// A record line that does not parse into a `(field, value)` pair or names
/// no field on the host.
///
/// Never returned to callers: `load` reports it on the diagnostic channel and
/// stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    /// The line does not contain the separator exactly once.
    #[error("line {line}: expected exactly one {separator:?} separator, found {found}")]
    Separator {
        line: usize,
        separator: char,
        found: usize,
    },

    /// The line's name does not resolve to any field of the host type.
    #[error("line {line}: no field named {field}")]
    UnknownField { line: usize, field: String },

    /// The line is not valid UTF-8.
    #[error("line {line}: not valid UTF-8")]
    Encoding { line: usize },
}
