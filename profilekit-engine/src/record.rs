//! The line-oriented profile record.
//!
//! One line per field, `<declared name><separator><value>\n`, in discovery
//! order. There is no header, footer or checksum, and values are written
//! verbatim: a value containing the separator or a line break produces a
//! line that will not load back.

use std::io::{self, Write};

use profilekit_codec::ValueCodec;
use profilekit_model::{FieldCatalog, FieldDescriptor, HostObject, Tag, canonical_name};
use tracing::warn;

use crate::error::{MalformedRecord, ProfileError, ProfileResult};

/// One `(field, value)` line of a profile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    /// Declared field name as written to the record.
    pub field: String,
    /// Encoded value.
    pub raw: String,
}

impl RecordEntry {
    pub fn new(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// Splits a record line into its field and value.
    ///
    /// The line must contain the separator exactly once; an empty value is
    /// allowed. `line_no` is 1-based and only used for the error.
    pub fn parse(line: &str, separator: char, line_no: usize) -> Result<Self, MalformedRecord> {
        let mut parts = line.split(separator);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(raw), None) => Ok(Self::new(field, raw)),
            _ => Err(MalformedRecord::Separator {
                line: line_no,
                separator,
                found: line.matches(separator).count(),
            }),
        }
    }

    /// The field name with any convention suffix stripped.
    pub fn canonical_name(&self) -> &str {
        canonical_name(&self.field)
    }

    /// The entry as one record line, terminator included.
    pub fn line(&self, separator: char) -> String {
        format!("{}{separator}{}\n", self.field, self.raw)
    }

    /// Writes the entry as one record line.
    pub fn write_to<W: Write>(&self, writer: &mut W, separator: char) -> io::Result<()> {
        writer.write_all(self.line(separator).as_bytes())
    }
}

/// An ordered, in-memory profile record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    entries: Vec<RecordEntry>,
}

impl ProfileRecord {
    /// Reads and encodes every field of `host` tagged `tag`.
    pub fn capture<H: HostObject>(host: &H, tag: &Tag, separator: char) -> ProfileResult<Self> {
        let entries = FieldCatalog::discover::<H>(tag)?
            .iter()
            .map(|descriptor| capture_entry(host, descriptor, separator))
            .collect::<ProfileResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W, separator: char) -> io::Result<()> {
        for entry in &self.entries {
            entry.write_to(writer, separator)?;
        }
        Ok(())
    }

    /// The record as it would appear on disk.
    pub fn render(&self, separator: char) -> String {
        self.entries
            .iter()
            .map(|e| e.line(separator))
            .collect()
    }
}

impl FromIterator<RecordEntry> for ProfileRecord {
    fn from_iter<I: IntoIterator<Item = RecordEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Reads one field through its accessor and encodes it.
pub(crate) fn capture_entry<H: HostObject>(
    host: &H,
    descriptor: &FieldDescriptor,
    separator: char,
) -> ProfileResult<RecordEntry> {
    if descriptor.name.contains(separator) {
        return Err(ProfileError::ReservedSeparator {
            field: descriptor.name.clone(),
            separator,
        });
    }

    let canonical = descriptor.canonical_name();
    let value = host
        .field_value(canonical)
        .map_err(|e| ProfileError::from_binding(canonical, e))?;
    let raw = ValueCodec::encode(&descriptor.category, &value)
        .map_err(|e| ProfileError::from_codec(canonical, e))?;

    if raw.contains(separator) || raw.contains(['\n', '\r']) {
        warn!(
            field = %descriptor.name,
            "Value contains the record separator or a line break and will not load back"
        );
    }

    Ok(RecordEntry::new(descriptor.name.clone(), raw))
}
