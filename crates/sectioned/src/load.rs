//! Bulk loading from JSON and TOML.
//!
//! The JSON form is an array of group records:
//!
//! ```json
//! [
//!   { "name": "Fruit", "rows": ["apple", "pear"] },
//!   { "name": "Misc", "rows": ["x"], "showTitle": false }
//! ]
//! ```
//!
//! The TOML form is an array of tables named `groups`:
//!
//! ```toml
//! [[groups]]
//! name = "Fruit"
//! rows = ["apple", "pear"]
//!
//! [[groups]]
//! name = "Misc"
//! rows = ["x"]
//! show_title = false
//! ```
//!
//! Records are applied in order through
//! [`GroupedSequence::create_with_config`], so name collisions follow the
//! configured [`DuplicateNamePolicy`](crate::DuplicateNamePolicy).

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SequenceConfig;
use crate::error::{Result, SequenceError};
use crate::group::GroupSpec;
use crate::logging::targets;
use crate::sequence::GroupedSequence;

#[derive(Deserialize)]
#[serde(bound = "R: DeserializeOwned")]
struct TomlDocument<R> {
    #[serde(default = "Vec::new")]
    groups: Vec<GroupSpec<R>>,
}

#[derive(Serialize)]
struct TomlDocumentRef<'a, R> {
    groups: &'a [GroupSpec<R>],
}

/// Parses JSON group records.
pub fn specs_from_json_str<R: DeserializeOwned>(text: &str) -> Result<Vec<GroupSpec<R>>> {
    serde_json::from_str(text).map_err(|e| SequenceError::parse("JSON", e))
}

/// Parses TOML group records from a `[[groups]]` array.
pub fn specs_from_toml_str<R: DeserializeOwned>(text: &str) -> Result<Vec<GroupSpec<R>>> {
    toml::from_str::<TomlDocument<R>>(text)
        .map(|document| document.groups)
        .map_err(|e| SequenceError::parse("TOML", e))
}

/// Builds a sequence from JSON text.
pub fn from_json_str<R: DeserializeOwned>(
    text: &str,
    config: SequenceConfig,
) -> Result<GroupedSequence<R>> {
    let specs = specs_from_json_str(text)?;
    debug!(target: targets::LOAD, records = specs.len(), "parsed JSON group records");
    GroupedSequence::create_with_config(specs, config)
}

/// Builds a sequence from TOML text.
pub fn from_toml_str<R: DeserializeOwned>(
    text: &str,
    config: SequenceConfig,
) -> Result<GroupedSequence<R>> {
    let specs = specs_from_toml_str(text)?;
    debug!(target: targets::LOAD, records = specs.len(), "parsed TOML group records");
    GroupedSequence::create_with_config(specs, config)
}

/// Builds a sequence from a JSON file.
pub fn from_json_file<R: DeserializeOwned>(
    path: impl AsRef<Path>,
    config: SequenceConfig,
) -> Result<GroupedSequence<R>> {
    from_json_str(&read(path.as_ref())?, config)
}

/// Builds a sequence from a TOML file.
pub fn from_toml_file<R: DeserializeOwned>(
    path: impl AsRef<Path>,
    config: SequenceConfig,
) -> Result<GroupedSequence<R>> {
    from_toml_str(&read(path.as_ref())?, config)
}

/// Serializes the sequence as pretty-printed JSON records.
pub fn to_json_string<R: Clone + Serialize>(sequence: &GroupedSequence<R>) -> Result<String> {
    serde_json::to_string_pretty(&sequence.to_specs()).map_err(|e| SequenceError::parse("JSON", e))
}

/// Serializes the sequence as a TOML `[[groups]]` array.
///
/// TOML has no null, so row identifiers must serialize to TOML values.
pub fn to_toml_string<R: Clone + Serialize>(sequence: &GroupedSequence<R>) -> Result<String> {
    let specs = sequence.to_specs();
    toml::to_string(&TomlDocumentRef { groups: &specs })
        .map_err(|e| SequenceError::parse("TOML", e))
}

fn read(path: &Path) -> Result<String> {
    debug!(target: targets::LOAD, path = %path.display(), "reading group records");
    std::fs::read_to_string(path).map_err(|e| SequenceError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicateNamePolicy;

    const JSON: &str = r#"[
        {"name": "Fruit", "rows": ["apple", "pear"]},
        {"name": "Misc", "rows": ["x"], "showTitle": false}
    ]"#;

    const TOML: &str = r#"
[[groups]]
name = "Fruit"
rows = ["apple", "pear"]

[[groups]]
name = "Misc"
rows = ["x"]
show_title = false
"#;

    #[test]
    fn test_json_and_toml_agree() {
        let from_json: GroupedSequence<String> =
            from_json_str(JSON, SequenceConfig::default()).unwrap();
        let from_toml: GroupedSequence<String> =
            from_toml_str(TOML, SequenceConfig::default()).unwrap();

        assert_eq!(from_json, from_toml);
        assert_eq!(from_json.title_at(1).unwrap(), "empty name");
        assert_eq!(from_json.rows_in("Fruit"), &["apple", "pear"]);
    }

    #[test]
    fn test_integer_rows() {
        let sequence: GroupedSequence<u64> =
            from_json_str(r#"[{"name": "A", "rows": [10, 20]}]"#, SequenceConfig::default())
                .unwrap();
        assert_eq!(*sequence.at((0, 1)).unwrap(), 20);
    }

    #[test]
    fn test_empty_toml_document() {
        let sequence: GroupedSequence<String> =
            from_toml_str("", SequenceConfig::default()).unwrap();
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_malformed_input() {
        let err = from_json_str::<String>("{", SequenceConfig::default()).unwrap_err();
        assert!(matches!(err, SequenceError::Parse { format: "JSON", .. }));

        let err = from_toml_str::<String>("[[groups]]\nrows = 3", SequenceConfig::default())
            .unwrap_err();
        assert!(matches!(err, SequenceError::Parse { format: "TOML", .. }));
    }

    #[test]
    fn test_duplicate_policy_applies() {
        let text = r#"[{"name": "A", "rows": [1]}, {"name": "A", "rows": [2]}]"#;

        let err = from_json_str::<u32>(text, SequenceConfig::default()).unwrap_err();
        assert!(matches!(err, SequenceError::DuplicateName { .. }));

        let config = SequenceConfig::new().with_duplicate_names(DuplicateNamePolicy::Replace);
        let sequence = from_json_str::<u32>(text, config).unwrap();
        assert_eq!(sequence.rows_in("A"), &[2]);
    }

    #[test]
    fn test_serialized_output_reloads() {
        let sequence: GroupedSequence<String> =
            from_json_str(JSON, SequenceConfig::default()).unwrap();

        let json = to_json_string(&sequence).unwrap();
        assert!(json.contains("\"showTitle\": false"));
        let reloaded: GroupedSequence<String> =
            from_json_str(&json, SequenceConfig::default()).unwrap();
        assert_eq!(reloaded, sequence);

        let toml = to_toml_string(&sequence).unwrap();
        let reloaded: GroupedSequence<String> =
            from_toml_str(&toml, SequenceConfig::default()).unwrap();
        assert_eq!(reloaded, sequence);
    }

    #[test]
    fn test_files() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("groups.json");
        let toml_path = dir.path().join("groups.toml");
        std::fs::write(&json_path, JSON).unwrap();
        std::fs::write(&toml_path, TOML).unwrap();

        let a: GroupedSequence<String> =
            from_json_file(&json_path, SequenceConfig::default()).unwrap();
        let b: GroupedSequence<String> =
            from_toml_file(&toml_path, SequenceConfig::default()).unwrap();
        assert_eq!(a, b);

        let missing = from_json_file::<String>(dir.path().join("none.json"), SequenceConfig::default());
        assert!(matches!(missing, Err(SequenceError::Io { .. })));
    }
}
