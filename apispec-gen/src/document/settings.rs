//! `[package.metadata.openapi]` and `[package.metadata.openapi3]` manifest tables.
//!
//! Values are applied through the same setters as programmatic configuration so both
//! routes end in the same state.

use crate::{
    BaseDocumentConfig, ConfigError, DocumentConfig, Oauth2SchemeConfig, Project, Result, Server,
    V2DocumentConfig, V3DocumentConfig,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct DocumentSettings {
    title: Option<String>,
    version: Option<String>,
    description: Option<String>,
    format: Option<String>,
    output_directory: Option<PathBuf>,
    snippets_directory: Option<PathBuf>,
    separate_public_api: Option<bool>,
    oauth2: Option<Oauth2SchemeConfig>,

    // openapi
    host: Option<String>,
    base_path: Option<String>,
    schemes: Option<Vec<String>>,

    // openapi3
    server: Option<String>,
    servers: Option<Vec<Server>>,
}

impl DocumentSettings {
    pub(crate) fn apply_to_v2(
        mut self,
        config: &mut V2DocumentConfig,
        project: &Project,
    ) -> Result<()> {
        if self.server.is_some() || self.servers.is_some() {
            return Err(misplaced("server/servers", V2DocumentConfig::NAME));
        }
        self.apply_base(&mut config.base, project)?;
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = Some(base_path);
        }
        if let Some(schemes) = self.schemes {
            config.schemes = schemes;
        }
        Ok(())
    }

    pub(crate) fn apply_to_v3(
        mut self,
        config: &mut V3DocumentConfig,
        project: &Project,
    ) -> Result<()> {
        if self.host.is_some() || self.base_path.is_some() || self.schemes.is_some() {
            return Err(misplaced("host/base-path/schemes", V3DocumentConfig::NAME));
        }
        self.apply_base(&mut config.base, project)?;
        match (self.server, self.servers) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::configuration(
                    "set either `server` or `servers` in [package.metadata.openapi3], not both",
                ))
            }
            (Some(url), None) => config.set_server_url(url),
            (None, Some(servers)) => config.set_servers(
                servers
                    .into_iter()
                    .map(|configured| move |server: &mut Server| *server = configured),
            ),
            (None, None) => {}
        }
        Ok(())
    }

    fn apply_base(&mut self, base: &mut BaseDocumentConfig, project: &Project) -> Result<()> {
        if let Some(title) = self.title.take() {
            base.title = title;
        }
        if let Some(version) = self.version.take() {
            base.version = version;
        }
        if let Some(description) = self.description.take() {
            base.description = Some(description);
        }
        if let Some(format) = self.format.take() {
            base.format = format.parse()?;
        }
        if let Some(output_directory) = self.output_directory.take() {
            base.output_directory = output_directory;
        }
        if let Some(snippets_directory) = self.snippets_directory.take() {
            base.snippets_directory = snippets_directory;
        }
        if let Some(separate_public_api) = self.separate_public_api.take() {
            base.separate_public_api = separate_public_api;
        }
        if let Some(oauth2) = self.oauth2.take() {
            base.set_oauth2_security_scheme_definition(project, |definition| {
                *definition = oauth2
            })?;
        }
        Ok(())
    }
}

fn misplaced(keys: &str, table: &str) -> ConfigError {
    ConfigError::configuration(format!("{keys} cannot be set in [package.metadata.{table}]"))
}
