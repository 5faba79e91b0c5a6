//! Error types for the field model.

use thiserror::Error;

use crate::ValueCategory;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A host object refused an accessor or mutator call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors from invoking a field binding against a host.
#[derive(Debug, Error)]
pub enum BindingError {
    /// No field with this canonical name is registered on the host type.
    #[error("no field named {0}")]
    UnknownField(String),

    /// The field's kind has no accessor or mutator mapping.
    #[error("field {field} has unsupported type {kind}")]
    Unsupported { field: String, kind: String },

    /// A value of the wrong category was handed to a mutator.
    #[error("field {field} expects a {expected} value, got {found}")]
    CategoryMismatch {
        field: String,
        expected: ValueCategory,
        found: ValueCategory,
    },

    /// The host rejected the call.
    #[error("field {field} rejected by host: {source}")]
    Host {
        field: String,
        #[source]
        source: HostError,
    },
}

/// Errors that can occur while introspecting a host type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The host type's field table cannot be used for discovery.
    #[error("cannot introspect {host}: {reason}")]
    Introspection { host: &'static str, reason: String },
}
