//! Engine configuration.

use profilekit_model::SUFFIX_MARKER;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

/// Separator written between field name and value.
pub const DEFAULT_SEPARATOR: char = '?';

/// Extension `save` appends to the profile name.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Record format settings.
///
/// Missing keys fall back to the defaults when deserialized, so an empty
/// document yields the standard `name?value` / `.txt` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub separator: char,
    pub extension: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ProfileConfig {
    /// Rejects settings that would make records unreadable.
    pub fn validate(&self) -> ProfileResult<()> {
        match self.separator {
            SUFFIX_MARKER => {
                return Err(ProfileError::InvalidConfig(
                    "separator collides with the field suffix marker '_'".into(),
                ));
            }
            '\n' | '\r' => {
                return Err(ProfileError::InvalidConfig(
                    "separator cannot be a line break".into(),
                ));
            }
            _ => {}
        }
        if self.extension.is_empty() {
            return Err(ProfileError::InvalidConfig("extension is empty".into()));
        }
        if self.extension.contains(['.', '/', '\\']) {
            return Err(ProfileError::InvalidConfig(format!(
                "extension {:?} must be a bare suffix",
                self.extension
            )));
        }
        Ok(())
    }
}
