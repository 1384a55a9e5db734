use super::settings::DocumentSettings;
use crate::{configure, BaseDocumentConfig, ConfigError, DocumentConfig, Project, Result, Server};
use serde::Serialize;

/// Settings of an OpenAPI v3 document.
///
/// The server list is only ever replaced as a whole, through one of
/// [Self::set_server_url], [Self::set_server] and [Self::set_servers].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct V3DocumentConfig {
    #[serde(flatten)]
    pub base: BaseDocumentConfig,
    servers: Vec<Server>,
}

impl V3DocumentConfig {
    pub fn new(project: &Project) -> Self {
        Self {
            base: BaseDocumentConfig::new(project, "openapi3"),
            servers: vec![Server::new("http://localhost")],
        }
    }

    /// Defaults overridden by the `[package.metadata.openapi3]` table of the project manifest.
    pub fn from_project(project: &Project) -> Result<Self> {
        let mut config = Self::new(project);
        if let Some(settings) = project.metadata::<DocumentSettings>(Self::NAME)? {
            log::info!("Apply [package.metadata.{}] settings", Self::NAME);
            settings.apply_to_v3(&mut config, project)?;
        }
        Ok(config)
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Replace the servers with a single one at `url`.
    pub fn set_server_url(&mut self, url: impl Into<String>) {
        self.servers = vec![Server::new(url)];
    }

    /// Replace the servers with a single one configured by `action`.
    pub fn set_server(&mut self, action: impl FnOnce(&mut Server)) {
        self.servers = vec![configure(action)];
    }

    /// Replace the servers with one server per action, in order.
    pub fn set_servers<I, F>(&mut self, actions: I)
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&mut Server),
    {
        self.servers = actions.into_iter().map(configure).collect();
    }
}

impl DocumentConfig for V3DocumentConfig {
    const NAME: &'static str = "openapi3";

    fn base(&self) -> &BaseDocumentConfig {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseDocumentConfig {
        &mut self.base
    }

    fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.servers.is_empty() {
            return Err(ConfigError::configuration("servers must not be empty"));
        }
        Ok(())
    }
}
