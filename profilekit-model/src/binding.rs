use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{BindingError, HostError};
use crate::naming::canonical_name;
use crate::{FieldDescriptor, FieldValue, Tag, ValueCategory};

pub type TextGetter<H> = fn(&H) -> Result<String, HostError>;
pub type TextSetter<H> = fn(&mut H, String) -> Result<(), HostError>;
pub type BoolGetter<H> = fn(&H) -> Result<bool, HostError>;
pub type BoolSetter<H> = fn(&mut H, bool) -> Result<(), HostError>;

enum Access<H> {
    Text {
        get: TextGetter<H>,
        set: TextSetter<H>,
    },
    Boolean {
        get: BoolGetter<H>,
        set: BoolSetter<H>,
    },
    Unsupported,
}

/// A field descriptor paired with the host's typed accessor and mutator.
///
/// The accessor and mutator are registered under the field's canonical name;
/// the descriptor keeps the declared name, which is what gets persisted.
pub struct FieldBinding<H> {
    descriptor: FieldDescriptor,
    access: Access<H>,
}

impl<H> FieldBinding<H> {
    /// Binds a text field.
    pub fn text(
        name: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
        get: TextGetter<H>,
        set: TextSetter<H>,
    ) -> Self {
        Self {
            descriptor: FieldDescriptor::new(name, ValueCategory::Text, tags),
            access: Access::Text { get, set },
        }
    }

    /// Binds a boolean field.
    pub fn boolean(
        name: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
        get: BoolGetter<H>,
        set: BoolSetter<H>,
    ) -> Self {
        Self {
            descriptor: FieldDescriptor::new(name, ValueCategory::Boolean, tags),
            access: Access::Boolean { get, set },
        }
    }

    /// Declares a field of a kind with no value mapping.
    ///
    /// It is still discovered under its tags, but every read or write fails.
    pub fn unsupported(
        name: impl Into<String>,
        kind: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            descriptor: FieldDescriptor::new(name, ValueCategory::Other(kind.into()), tags),
            access: Access::Unsupported,
        }
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn canonical_name(&self) -> &str {
        self.descriptor.canonical_name()
    }

    /// Reads the field's current value through its accessor.
    pub fn read(&self, host: &H) -> Result<FieldValue, BindingError> {
        let value = match &self.access {
            Access::Text { get, .. } => get(host).map(FieldValue::Text),
            Access::Boolean { get, .. } => get(host).map(FieldValue::Boolean),
            Access::Unsupported => return Err(self.unsupported_error()),
        };
        value.map_err(|source| self.host_error(source))
    }

    /// Hands `value` to the field's mutator.
    pub fn write(&self, host: &mut H, value: FieldValue) -> Result<(), BindingError> {
        let result = match (&self.access, value) {
            (Access::Text { set, .. }, FieldValue::Text(s)) => set(host, s),
            (Access::Boolean { set, .. }, FieldValue::Boolean(b)) => set(host, b),
            (Access::Unsupported, _) => return Err(self.unsupported_error()),
            (_, other) => {
                return Err(BindingError::CategoryMismatch {
                    field: self.canonical_name().to_string(),
                    expected: self.descriptor.category.clone(),
                    found: other.category(),
                });
            }
        };
        result.map_err(|source| self.host_error(source))
    }

    fn unsupported_error(&self) -> BindingError {
        BindingError::Unsupported {
            field: self.canonical_name().to_string(),
            kind: self.descriptor.category.to_string(),
        }
    }

    fn host_error(&self, source: HostError) -> BindingError {
        BindingError::Host {
            field: self.canonical_name().to_string(),
            source,
        }
    }
}

impl<H> fmt::Debug for FieldBinding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// The per-host-type field table, in declaration order.
///
/// Build it once per host type and hand it out from
/// [`HostObject::field_table`](crate::HostObject::field_table). Declaration
/// order is the order fields are discovered in, and therefore the line order
/// of saved profiles.
pub struct FieldTable<H> {
    bindings: Vec<FieldBinding<H>>,
    validated: OnceLock<Result<(), String>>,
}

impl<H> FieldTable<H> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            validated: OnceLock::new(),
        }
    }

    /// Appends a binding (builder style).
    pub fn with(mut self, binding: FieldBinding<H>) -> Self {
        self.push(binding);
        self
    }

    /// Appends a text field.
    pub fn text(
        self,
        name: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
        get: TextGetter<H>,
        set: TextSetter<H>,
    ) -> Self {
        self.with(FieldBinding::text(name, tags, get, set))
    }

    /// Appends a boolean field.
    pub fn boolean(
        self,
        name: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
        get: BoolGetter<H>,
        set: BoolSetter<H>,
    ) -> Self {
        self.with(FieldBinding::boolean(name, tags, get, set))
    }

    /// Appends a field of a kind with no value mapping.
    pub fn unsupported(
        self,
        name: impl Into<String>,
        kind: impl Into<String>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        self.with(FieldBinding::unsupported(name, kind, tags))
    }

    pub fn push(&mut self, binding: FieldBinding<H>) {
        self.bindings.push(binding);
        self.validated.take();
    }

    pub fn bindings(&self) -> &[FieldBinding<H>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Looks a binding up by canonical name, regardless of its tags.
    pub fn get(&self, canonical: &str) -> Option<&FieldBinding<H>> {
        self.bindings
            .iter()
            .find(|b| b.canonical_name() == canonical)
    }

    /// Bindings carrying `tag`, in declaration order.
    pub fn tagged<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a FieldBinding<H>> + 'a {
        self.bindings
            .iter()
            .filter(move |b| b.descriptor.has_tag(tag))
    }

    /// Checks that every field has a usable, unique canonical name.
    ///
    /// The result is computed on first use and kept until the next `push`.
    pub fn validate(&self) -> Result<(), &str> {
        self.validated
            .get_or_init(|| self.check_names())
            .as_ref()
            .map(|_| ())
            .map_err(String::as_str)
    }

    fn check_names(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for binding in &self.bindings {
            let name = &binding.descriptor.name;
            if name.is_empty() {
                return Err("field with empty name".to_string());
            }
            let canonical = canonical_name(name);
            if canonical.is_empty() {
                return Err(format!("field {name} has an empty canonical name"));
            }
            if !seen.insert(canonical) {
                return Err(format!("more than one field is named {canonical}"));
            }
        }
        Ok(())
    }
}

impl<H> Default for FieldTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for FieldTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.bindings).finish()
    }
}
