//! Profile persistence for tagged host fields.
//!
//! A profile is the set of a host object's fields carrying one [`Tag`]. The
//! [`ProfileEngine`] can:
//! - **save** them to a line-oriented text record (`name?value`, one per line)
//! - **load** a record back onto a host through its registered mutators
//! - **clear** them to their defaults (`""` for text, `false` for booleans)
//!
//! # Error policy
//!
//! - I/O failures, an unusable field table and unsupported field types are
//!   returned as [`ProfileError`].
//! - During load, the first malformed line is reported on the
//!   [`DiagnosticSink`] and stops the load. Earlier lines stay applied.
//! - During load and clear, a mutator that rejects its value is reported and
//!   skipped.
//!
//! # Record format
//!
//! ```text
//! name?Ann
//! active?true
//! ```
//!
//! Values are not escaped. A value containing the separator cannot be loaded
//! back.
//!
//! [`Tag`]: profilekit_model::Tag

mod config;
mod diagnostics;
mod engine;
mod error;
mod location;
mod record;

pub use config::{DEFAULT_EXTENSION, DEFAULT_SEPARATOR, ProfileConfig};
pub use diagnostics::{
    CollectingDiagnostics, DiagnosticSink, GENERAL_ERROR, StderrDiagnostics, TracingDiagnostics,
};
pub use engine::ProfileEngine;
pub use error::{MalformedRecord, ProfileError, ProfileResult};
pub use location::{ILLEGAL_NAME_CHARS, ProfileLocation};
pub use record::{ProfileRecord, RecordEntry};
