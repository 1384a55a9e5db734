use super::settings::DocumentSettings;
use crate::{BaseDocumentConfig, ConfigError, DocumentConfig, Project, Result};
use serde::Serialize;

/// Settings of an OpenAPI v2 (Swagger) document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct V2DocumentConfig {
    #[serde(flatten)]
    pub base: BaseDocumentConfig,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// URL schemes, e.g. `http`, `https`
    pub schemes: Vec<String>,
}

impl V2DocumentConfig {
    pub fn new(project: &Project) -> Self {
        Self {
            base: BaseDocumentConfig::new(project, "openapi"),
            host: "localhost".to_string(),
            base_path: None,
            schemes: vec!["http".to_string()],
        }
    }

    /// Defaults overridden by the `[package.metadata.openapi]` table of the project manifest.
    pub fn from_project(project: &Project) -> Result<Self> {
        let mut config = Self::new(project);
        if let Some(settings) = project.metadata::<DocumentSettings>(Self::NAME)? {
            log::info!("Apply [package.metadata.{}] settings", Self::NAME);
            settings.apply_to_v2(&mut config, project)?;
        }
        Ok(config)
    }
}

impl DocumentConfig for V2DocumentConfig {
    const NAME: &'static str = "openapi";

    fn base(&self) -> &BaseDocumentConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDocumentConfig {
        &mut self.base
    }

    fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.schemes.is_empty() {
            return Err(ConfigError::configuration("schemes must not be empty"));
        }
        Ok(())
    }
}
