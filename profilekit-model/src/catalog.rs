use std::any::type_name;

use crate::error::{CatalogError, CatalogResult};
use crate::{FieldDescriptor, HostObject, Tag};

/// Field discovery over a host type's registered field table.
///
/// The table is validated once, on the first query; later queries reuse
/// that result.
pub struct FieldCatalog;

impl FieldCatalog {
    /// Descriptors of `H`'s fields carrying `tag`, in declaration order.
    ///
    /// A host with no matching fields yields an empty list. Fails only when
    /// the table itself is unusable (empty or clashing canonical names).
    pub fn discover<H: HostObject>(tag: &Tag) -> CatalogResult<Vec<FieldDescriptor>> {
        Self::check::<H>()?;
        Ok(H::describe_fields(tag))
    }

    /// Resolves a canonical name to its descriptor, regardless of tags.
    pub fn resolve<H: HostObject>(canonical: &str) -> CatalogResult<Option<FieldDescriptor>> {
        Self::check::<H>()?;
        Ok(H::field_table()
            .get(canonical)
            .map(|b| b.descriptor().clone()))
    }

    fn check<H: HostObject>() -> CatalogResult<()> {
        H::field_table()
            .validate()
            .map_err(|reason| CatalogError::Introspection {
                host: type_name::<H>(),
                reason: reason.to_string(),
            })
    }
}
