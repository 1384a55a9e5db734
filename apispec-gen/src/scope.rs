//! Loading of OAuth2 scope descriptions from a key/value file.

mod properties;

use crate::{ConfigError, Result};
use std::{collections::BTreeMap, fs, path::Path};

/// Read a flat `scope -> description` mapping from `path`.
///
/// `*.properties` files are read as Java-style properties, anything else as a YAML
/// mapping of strings to strings (which also covers JSON). The file is read on every
/// call.
pub fn load_scope_descriptions(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let scopes = if is_properties(path) {
        properties::parse(&content).map_err(|reason| ConfigError::parse(path, reason))?
    } else {
        parse_yaml(&content).map_err(|e| ConfigError::parse(path, e))?
    };
    log::info!("Load scope descriptions from {}", path.display());
    log::debug!("{} scope(s) described in {}", scopes.len(), path.display());
    Ok(scopes)
}

fn is_properties(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("properties"))
}

fn parse_yaml(content: &str) -> std::result::Result<BTreeMap<String, String>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    // A `null` document is an empty mapping as well.
    let scopes: Option<BTreeMap<String, String>> = serde_yaml::from_str(content)?;
    Ok(scopes.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use std::path::PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_properties_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.properties", "read:foo=Read Foo\n");
        assert_eq!(
            load_scope_descriptions(path).unwrap(),
            btreemap! { "read:foo".to_string() => "Read Foo".to_string() }
        );
    }

    #[test]
    fn test_properties_file_with_surrogate_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.properties", "emoji=smile \\uD83D\\uDE00\n");
        assert_eq!(
            load_scope_descriptions(path).unwrap(),
            btreemap! { "emoji".to_string() => "smile \u{1F600}".to_string() }
        );
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "scopes.yaml",
            "carts:read: Read carts\n\"carts:write\": Modify carts\n",
        );
        assert_eq!(
            load_scope_descriptions(path).unwrap(),
            btreemap! {
                "carts:read".to_string() => "Read carts".to_string(),
                "carts:write".to_string() => "Modify carts".to_string(),
            }
        );
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.json", r#"{"admin": "Everything"}"#);
        assert_eq!(
            load_scope_descriptions(path).unwrap(),
            btreemap! { "admin".to_string() => "Everything".to_string() }
        );
    }

    #[test]
    fn test_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["empty.properties", "empty.yaml"] {
            let path = write(&dir, name, "");
            assert!(load_scope_descriptions(path).unwrap().is_empty());
        }
        let path = write(&dir, "null.yaml", "null\n");
        assert!(load_scope_descriptions(path).unwrap().is_empty());
    }

    #[test]
    fn test_reads_file_again_on_each_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.properties", "a=first\n");
        assert_eq!(load_scope_descriptions(&path).unwrap()["a"], "first");
        fs::write(&path, "a=second\n").unwrap();
        assert_eq!(load_scope_descriptions(&path).unwrap()["a"], "second");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scope_descriptions(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileAccess { .. }));
    }

    #[test]
    fn test_nested_yaml_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.yaml", "carts:\n  read: Read carts\n");
        let err = load_scope_descriptions(path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_yaml_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.yml", "- read\n- write\n");
        let err = load_scope_descriptions(path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_malformed_properties_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "scopes.properties", "read=\\uZZZZ\n");
        let err = load_scope_descriptions(path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
