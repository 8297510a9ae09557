//! Behavioral configuration for grouped sequences.
//!
//! A [`SequenceConfig`] controls the placeholder reported for groups whose
//! title is hidden and what happens when a group name collides with one
//! that already exists. Both have defaults, so most callers never touch it.
//!
//! Configuration can be read from TOML:
//!
//! ```
//! use sectioned::{DuplicateNamePolicy, SequenceConfig};
//!
//! let config = SequenceConfig::from_toml_str(r#"
//! empty_title = ""
//! duplicate_names = "replace"
//! "#).unwrap();
//!
//! assert_eq!(config.empty_title, "");
//! assert_eq!(config.duplicate_names, DuplicateNamePolicy::Replace);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SequenceError};

/// Title reported for a group whose `show_title` flag is off.
pub const EMPTY_SECTION_TITLE: &str = "empty name";

/// How a name collision is resolved during bulk construction and
/// positional insertion.
///
/// `add_group` is create-or-replace regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    /// Fail with [`SequenceError::DuplicateName`] and change nothing.
    #[default]
    Reject,
    /// Replace the existing group.
    ///
    /// During construction this behaves like successive `add_group` calls:
    /// the name keeps the position of its first record and takes the rows
    /// and title flag of its last. During insertion the existing group is
    /// removed and the new one is placed at the requested index.
    Replace,
}

/// Configuration for a [`GroupedSequence`](crate::GroupedSequence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Title reported by `title_at` for groups with a hidden title.
    pub empty_title: String,
    /// Name collision policy.
    pub duplicate_names: DuplicateNamePolicy,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            empty_title: EMPTY_SECTION_TITLE.to_string(),
            duplicate_names: DuplicateNamePolicy::default(),
        }
    }
}

impl SequenceConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder title.
    pub fn with_empty_title(mut self, title: impl Into<String>) -> Self {
        self.empty_title = title.into();
        self
    }

    /// Sets the duplicate name policy.
    pub fn with_duplicate_names(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }

    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SequenceError::parse("TOML", e))
    }

    /// Reads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SequenceError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SequenceError::parse("TOML", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SequenceConfig::default();
        assert_eq!(config.empty_title, "empty name");
        assert_eq!(config.duplicate_names, DuplicateNamePolicy::Reject);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SequenceConfig::from_toml_str("").unwrap();
        assert_eq!(config, SequenceConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SequenceConfig::from_toml_str("duplicate_names = \"replace\"").unwrap();
        assert_eq!(config.empty_title, EMPTY_SECTION_TITLE);
        assert_eq!(config.duplicate_names, DuplicateNamePolicy::Replace);
    }

    #[test]
    fn test_invalid_policy_is_parse_error() {
        let err = SequenceConfig::from_toml_str("duplicate_names = \"merge\"").unwrap_err();
        assert!(matches!(err, SequenceError::Parse { format: "TOML", .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SequenceConfig::new()
            .with_empty_title("-")
            .with_duplicate_names(DuplicateNamePolicy::Replace);
        let text = config.to_toml_string().unwrap();
        assert_eq!(SequenceConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sectioned.toml");
        std::fs::write(&path, "empty_title = \"(untitled)\"\n").unwrap();

        let config = SequenceConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.empty_title, "(untitled)");

        let missing = SequenceConfig::from_toml_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(SequenceError::Io { .. })));
    }
}
