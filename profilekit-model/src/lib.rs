//! Field model for profilekit.
//!
//! Defines how a host object exposes its fields to the profile engine:
//! - [`Tag`] — groups a subset of a host type's fields into one profile
//! - [`FieldDescriptor`] — name, [`ValueCategory`] and tags of one field
//! - [`FieldTable`] / [`FieldBinding`] — the per-type table of typed accessors
//!   and mutators, registered once instead of discovered at runtime
//! - [`HostObject`] — the trait a host type implements to hand out its table
//! - [`FieldCatalog`] — tag-filtered discovery in declaration order
//!
//! Mutators are always looked up by canonical name (see [`canonical_name`]).

mod binding;
mod catalog;
mod error;
mod host;
mod naming;
mod schema;

pub use binding::{BoolGetter, BoolSetter, FieldBinding, FieldTable, TextGetter, TextSetter};
pub use catalog::FieldCatalog;
pub use error::{BindingError, CatalogError, CatalogResult, HostError};
pub use host::HostObject;
pub use naming::{SUFFIX_MARKER, canonical_name};
pub use schema::{FieldDescriptor, FieldValue, Tag, ValueCategory};
