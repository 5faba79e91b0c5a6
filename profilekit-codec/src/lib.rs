//! Value codec for profilekit.
//!
//! Converts field values to and from the single-line text stored in a
//! profile record. Only [`ValueCategory::Text`] and
//! [`ValueCategory::Boolean`] have a mapping.
//!
//! Boolean decoding is strict: only the exact literal `true` decodes to
//! `true`. Anything else, including `True`, `1` and the empty string, decodes
//! to `false`.

use profilekit_model::{FieldValue, ValueCategory};
use thiserror::Error;

pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The category has no text mapping or default value.
    #[error("unsupported field type: {0}")]
    UnsupportedType(String),

    /// A value was encoded under a category it does not belong to.
    #[error("cannot encode a {found} value as {expected}")]
    CategoryMismatch {
        expected: ValueCategory,
        found: ValueCategory,
    },
}

/// Text codec for field values.
pub struct ValueCodec;

impl ValueCodec {
    /// Encodes `value` as declared under `category`.
    pub fn encode(category: &ValueCategory, value: &FieldValue) -> CodecResult<String> {
        match (category, value) {
            (ValueCategory::Text, FieldValue::Text(s)) => Ok(s.clone()),
            (ValueCategory::Boolean, FieldValue::Boolean(b)) => Ok(bool_literal(*b).to_string()),
            (ValueCategory::Other(kind), _) => Err(CodecError::UnsupportedType(kind.clone())),
            (expected, found) => Err(CodecError::CategoryMismatch {
                expected: expected.clone(),
                found: found.category(),
            }),
        }
    }

    /// Decodes a raw record value under `category`.
    pub fn decode(category: &ValueCategory, raw: &str) -> CodecResult<FieldValue> {
        match category {
            ValueCategory::Text => Ok(FieldValue::Text(raw.to_string())),
            ValueCategory::Boolean => Ok(FieldValue::Boolean(raw == TRUE_LITERAL)),
            ValueCategory::Other(kind) => Err(CodecError::UnsupportedType(kind.clone())),
        }
    }

    /// The value a cleared field is reset to.
    pub fn default_value(category: &ValueCategory) -> CodecResult<FieldValue> {
        match category {
            ValueCategory::Text => Ok(FieldValue::Text(String::new())),
            ValueCategory::Boolean => Ok(FieldValue::Boolean(false)),
            ValueCategory::Other(kind) => Err(CodecError::UnsupportedType(kind.clone())),
        }
    }
}

fn bool_literal(value: bool) -> &'static str {
    if value { TRUE_LITERAL } else { FALSE_LITERAL }
}
