//! Save destinations.

use std::path::{Path, PathBuf};

use crate::error::{ProfileError, ProfileResult};

/// Characters a profile name may not contain.
pub const ILLEGAL_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Where `save` writes a profile: a directory plus a base name.
///
/// The engine appends the configured extension, so `("/tmp/", "p1")` with
/// the default configuration is written to `/tmp/p1.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLocation {
    directory: PathBuf,
    name: String,
}

impl ProfileLocation {
    /// Validates a destination chosen by the user.
    ///
    /// The directory must not be blank. The name must be non-empty and free
    /// of path separators, control characters and [`ILLEGAL_NAME_CHARS`].
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> ProfileResult<Self> {
        let directory = directory.into();
        let name = name.into();

        if directory.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ProfileError::InvalidLocation(
                "destination directory is blank".into(),
            ));
        }
        if name.trim().is_empty() {
            return Err(ProfileError::InvalidLocation("profile name is blank".into()));
        }
        if let Some(c) = name
            .chars()
            .find(|c| c.is_control() || ILLEGAL_NAME_CHARS.contains(c))
        {
            return Err(ProfileError::InvalidLocation(format!(
                "profile name {name:?} contains illegal character {c:?}"
            )));
        }

        Ok(Self { directory, name })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full file path with `extension` appended to the name.
    pub fn path(&self, extension: &str) -> PathBuf {
        self.directory.join(format!("{}.{extension}", self.name))
    }
}
