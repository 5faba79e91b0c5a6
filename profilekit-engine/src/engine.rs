//! Save, load and clear.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use profilekit_codec::ValueCodec;
use profilekit_model::{FieldCatalog, FieldDescriptor, HostObject, Tag};
use tracing::{debug, info, warn};

use crate::config::ProfileConfig;
use crate::diagnostics::{DiagnosticSink, GENERAL_ERROR, TracingDiagnostics};
use crate::error::{MalformedRecord, ProfileError, ProfileResult};
use crate::location::ProfileLocation;
use crate::record::{RecordEntry, capture_entry};

/// Persists tagged host fields to profile records and restores them.
///
/// The engine holds no per-call state; every operation receives its host
/// object fresh. It does no locking, so concurrent calls on the same host or
/// file must be serialized by the caller.
pub struct ProfileEngine<D = TracingDiagnostics> {
    config: ProfileConfig,
    diagnostics: D,
}

impl ProfileEngine<TracingDiagnostics> {
    /// Engine with the default record format, reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(TracingDiagnostics)
    }
}

impl Default for ProfileEngine<TracingDiagnostics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiagnosticSink> ProfileEngine<D> {
    pub fn with_diagnostics(diagnostics: D) -> Self {
        Self {
            config: ProfileConfig::default(),
            diagnostics,
        }
    }

    /// Engine with a custom record format. The configuration is validated.
    pub fn with_config(config: ProfileConfig, diagnostics: D) -> ProfileResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            diagnostics,
        })
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    /// Saves every field of `host` tagged `tag` to `directory/name.<ext>`.
    ///
    /// An existing file is overwritten. Returns the path written. If a field
    /// cannot be read or encoded, the file is left on disk holding the lines
    /// written so far.
    pub fn save<H: HostObject>(
        &self,
        host: &H,
        tag: &Tag,
        directory: impl Into<PathBuf>,
        name: &str,
    ) -> ProfileResult<PathBuf> {
        let location = ProfileLocation::new(directory, name)?;
        self.save_at(host, tag, &location)
    }

    /// Saves to an already validated location.
    pub fn save_at<H: HostObject>(
        &self,
        host: &H,
        tag: &Tag,
        location: &ProfileLocation,
    ) -> ProfileResult<PathBuf> {
        let descriptors = FieldCatalog::discover::<H>(tag)?;
        let path = location.path(&self.config.extension);

        let mut writer = BufWriter::new(File::create(&path)?);
        let written = self.write_entries(host, &descriptors, &mut writer)?;
        writer.flush()?;

        info!(tag = %tag, path = %path.display(), fields = written, "Profile saved");
        Ok(path)
    }

    /// Writes the record for `host` and `tag` to an arbitrary writer.
    pub fn save_to<H: HostObject, W: Write>(
        &self,
        host: &H,
        tag: &Tag,
        mut writer: W,
    ) -> ProfileResult<()> {
        let descriptors = FieldCatalog::discover::<H>(tag)?;
        let written = self.write_entries(host, &descriptors, &mut writer)?;
        writer.flush()?;
        debug!(tag = %tag, fields = written, "Profile record written");
        Ok(())
    }

    fn write_entries<H: HostObject, W: Write>(
        &self,
        host: &H,
        descriptors: &[FieldDescriptor],
        writer: &mut W,
    ) -> ProfileResult<usize> {
        let separator = self.config.separator;
        for descriptor in descriptors {
            capture_entry(host, descriptor, separator)?.write_to(writer, separator)?;
        }
        Ok(descriptors.len())
    }

    /// Restores field values from the profile file at `path`.
    ///
    /// The path is used as given; no extension is required.
    pub fn load<H: HostObject>(&self, host: &mut H, path: impl AsRef<Path>) -> ProfileResult<()> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        debug!(path = %path.display(), "Loading profile");
        self.load_from(host, reader)
    }

    /// Restores field values from a profile record, line by line.
    ///
    /// The first malformed line (invalid UTF-8, wrong separator count, or a
    /// name that does not resolve to a field) is reported on the diagnostic
    /// channel and ends the load; lines applied before it stay applied. A
    /// mutator that rejects its value is reported and the load continues with
    /// the next line. Only I/O errors, an unusable field table and
    /// unsupported field types are returned as errors.
    pub fn load_from<H: HostObject, R: BufRead>(
        &self,
        host: &mut H,
        mut reader: R,
    ) -> ProfileResult<()> {
        let separator = self.config.separator;
        let mut applied = 0usize;
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let parsed = decode_line(&buf, line_no)
                .and_then(|line| RecordEntry::parse(line, separator, line_no));
            let entry = match parsed {
                Ok(entry) => entry,
                Err(malformed) => {
                    self.report_malformed(&malformed);
                    break;
                }
            };

            let canonical = entry.canonical_name();
            let Some(descriptor) = FieldCatalog::resolve::<H>(canonical)? else {
                self.report_malformed(&MalformedRecord::UnknownField {
                    line: line_no,
                    field: canonical.to_string(),
                });
                break;
            };

            let value = ValueCodec::decode(&descriptor.category, &entry.raw)
                .map_err(|e| ProfileError::from_codec(canonical, e))?;

            match host.invoke_mutator(canonical, value) {
                Ok(()) => {
                    debug!(field = %canonical, line = line_no, "Field restored");
                    applied += 1;
                }
                Err(e) => {
                    warn!(field = %canonical, line = line_no, error = %e, "Mutator rejected profile value");
                    self.diagnostics.report(GENERAL_ERROR);
                }
            }
        }

        info!(fields = applied, "Profile loaded");
        Ok(())
    }

    /// Resets every field of `host` tagged `tag` to its default value.
    ///
    /// Text fields become empty and boolean fields `false`. An unsupported
    /// field aborts the call, leaving the fields after it untouched. A
    /// mutator that rejects the default is reported and skipped.
    pub fn clear<H: HostObject>(&self, host: &mut H, tag: &Tag) -> ProfileResult<()> {
        let descriptors = FieldCatalog::discover::<H>(tag)?;
        let mut cleared = 0usize;

        for descriptor in &descriptors {
            let canonical = descriptor.canonical_name();
            let value = ValueCodec::default_value(&descriptor.category)
                .map_err(|e| ProfileError::from_codec(canonical, e))?;

            match host.invoke_mutator(canonical, value) {
                Ok(()) => cleared += 1,
                Err(e) => {
                    warn!(field = %canonical, error = %e, "Mutator rejected default value");
                    self.diagnostics.report(GENERAL_ERROR);
                }
            }
        }

        info!(tag = %tag, fields = cleared, "Profile fields cleared");
        Ok(())
    }

    fn report_malformed(&self, malformed: &MalformedRecord) {
        warn!(error = %malformed, "Malformed profile line, stopping load");
        self.diagnostics.report(GENERAL_ERROR);
    }
}

/// Strips the line terminator (`\n` or `\r\n`) and decodes the line.
fn decode_line(bytes: &[u8], line_no: usize) -> Result<&str, MalformedRecord> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    std::str::from_utf8(bytes).map_err(|_| MalformedRecord::Encoding { line: line_no })
}
