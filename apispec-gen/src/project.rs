use crate::{ConfigError, Result};
use serde::{de::DeserializeOwned, Deserialize};
use std::{fs, path::*};

/// The build project the documents are generated for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Project {
    /// Directory relative settings paths are resolved against.
    pub root: PathBuf,
    pub name: Option<String>,
    pub version: ProjectVersion,
    manifest: Option<PathBuf>,
    metadata: toml::Table,
}

/// `package.version` as it appears in the manifest.
///
/// Only a plain string counts as a version; `version.workspace = true` and other
/// non-string values are kept as [ProjectVersion::Other].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProjectVersion {
    #[default]
    Unspecified,
    Text(String),
    Other(toml::Value),
}

impl ProjectVersion {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ProjectVersion::Text(version) => Some(version),
            ProjectVersion::Unspecified | ProjectVersion::Other(_) => None,
        }
    }
}

impl From<Option<toml::Value>> for ProjectVersion {
    fn from(value: Option<toml::Value>) -> Self {
        match value {
            None => ProjectVersion::Unspecified,
            Some(toml::Value::String(version)) => ProjectVersion::Text(version),
            Some(other) => ProjectVersion::Other(other),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    package: Package,
}

#[derive(Debug, Default, Deserialize)]
struct Package {
    name: Option<String>,
    version: Option<toml::Value>,
    #[serde(default)]
    metadata: toml::Table,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = ProjectVersion::Text(version.into());
        self
    }

    pub fn parse_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.file_name() != Some("Cargo.toml".as_ref()) {
            return Err(ConfigError::configuration(format!(
                "{} is not a Cargo.toml",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| ConfigError::parse(path, e))?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        log::debug!("Read project manifest {}", path.display());
        Ok(Self {
            root,
            name: manifest.package.name,
            version: manifest.package.version.into(),
            manifest: Some(path.to_path_buf()),
            metadata: manifest.package.metadata,
        })
    }

    /// Resolve `path` against the project root. Absolute paths are returned unchanged.
    pub fn file(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Deserialize the `[package.metadata.<key>]` table, if the manifest has one.
    pub(crate) fn metadata<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(table) = self.metadata.get(key) else {
            return Ok(None);
        };
        let manifest = self
            .manifest
            .clone()
            .unwrap_or_else(|| self.file("Cargo.toml"));
        table
            .clone()
            .try_into::<T>()
            .map(Some)
            .map_err(|e| ConfigError::parse(manifest, format!("[package.metadata.{key}]: {e}")))
    }
}
