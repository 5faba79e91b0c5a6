//! Field naming convention.
//!
//! A host field may be declared with a trailing qualifier, e.g. `server_var`.
//! Its accessor and mutator are always registered under the base identifier
//! (`server`), which is everything before the first `_`.

/// Separator between a field's base identifier and its qualifier.
pub const SUFFIX_MARKER: char = '_';

/// Strips any convention suffix from a declared field name.
///
/// `"server_var"` becomes `"server"`, `"server"` is returned unchanged, and a
/// name that starts with `_` has an empty canonical form.
pub fn canonical_name(raw: &str) -> &str {
    match raw.find(SUFFIX_MARKER) {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}
