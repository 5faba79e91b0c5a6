use crate::error::BindingError;
use crate::{FieldDescriptor, FieldTable, FieldValue, Tag};

/// An externally owned object whose fields can be persisted as profiles.
///
/// Implementors register their fields once, typically behind a
/// `std::sync::OnceLock`:
///
/// ```
/// use std::sync::OnceLock;
/// use profilekit_model::{FieldTable, HostObject, Tag};
///
/// const PROFILE: Tag = Tag::new("profile");
///
/// #[derive(Default)]
/// struct Form {
///     name: String,
///     active: bool,
/// }
///
/// impl HostObject for Form {
///     fn field_table() -> &'static FieldTable<Self> {
///         static TABLE: OnceLock<FieldTable<Form>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             FieldTable::<Form>::new()
///                 .text(
///                     "name",
///                     [PROFILE],
///                     |f| Ok(f.name.clone()),
///                     |f, v| {
///                         f.name = v;
///                         Ok(())
///                     },
///                 )
///                 .boolean(
///                     "active",
///                     [PROFILE],
///                     |f| Ok(f.active),
///                     |f, v| {
///                         f.active = v;
///                         Ok(())
///                     },
///                 )
///         })
///     }
/// }
///
/// let mut form = Form::default();
/// form.invoke_mutator("name", "Ann".into()).unwrap();
/// assert_eq!(form.name, "Ann");
/// ```
pub trait HostObject: Sized + 'static {
    /// The field table for this host type, in declaration order.
    fn field_table() -> &'static FieldTable<Self>;

    /// Descriptors of the fields carrying `tag`, in declaration order.
    fn describe_fields(tag: &Tag) -> Vec<FieldDescriptor> {
        Self::field_table()
            .tagged(tag)
            .map(|b| b.descriptor().clone())
            .collect()
    }

    /// Reads a field through the accessor registered under `canonical`.
    fn field_value(&self, canonical: &str) -> Result<FieldValue, BindingError> {
        Self::field_table()
            .get(canonical)
            .ok_or_else(|| BindingError::UnknownField(canonical.to_string()))?
            .read(self)
    }

    /// Invokes the mutator registered under `canonical`.
    fn invoke_mutator(&mut self, canonical: &str, value: FieldValue) -> Result<(), BindingError> {
        Self::field_table()
            .get(canonical)
            .ok_or_else(|| BindingError::UnknownField(canonical.to_string()))?
            .write(self, value)
    }
}
