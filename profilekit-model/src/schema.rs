use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::naming::canonical_name;

/// Marker grouping a subset of a host type's fields into one persistable profile.
///
/// Tags are usually declared as constants next to the host type:
///
/// ```
/// use profilekit_model::Tag;
///
/// pub const CONNECTION: Tag = Tag::new("connection");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(&'static str);

impl Tag {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The value kind of a host field.
///
/// Only `Text` and `Boolean` can be persisted. `Other` carries the host's own
/// name for a kind the engine has no mapping for; every codec operation on it
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Text,
    Boolean,
    Other(String),
}

impl ValueCategory {
    /// Returns `true` for the categories that have a codec and a default.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Text | Self::Boolean)
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Boolean => f.write_str("boolean"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// A native field value as read from, or handed to, a host object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Boolean(bool),
}

impl FieldValue {
    pub fn category(&self) -> ValueCategory {
        match self {
            Self::Text(_) => ValueCategory::Text,
            Self::Boolean(_) => ValueCategory::Boolean,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Boolean(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Describes one field of a host type.
///
/// Descriptors are derived from the host's [`FieldTable`](crate::FieldTable)
/// on every catalog query and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name, possibly carrying a `_suffix` qualifier.
    pub name: String,
    pub category: ValueCategory,
    pub tags: BTreeSet<Tag>,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        category: ValueCategory,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            tags: tags.into_iter().collect(),
        }
    }

    /// The name the field's accessor and mutator are reachable by.
    pub fn canonical_name(&self) -> &str {
        canonical_name(&self.name)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}
