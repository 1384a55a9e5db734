use crate::{configure, load_scope_descriptions, Project, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::PathBuf};

/// OAuth2 security scheme definition of the generated document.
///
/// When [Self::scope_descriptions_file] is set, [Self::configure] replaces
/// [Self::scopes] with the content of that file. The file always wins: scopes
/// assigned in the same configuration action are discarded, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Oauth2SchemeConfig {
    /// Properties or YAML file with `scope -> description` entries, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_descriptions_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// OAuth2 flows, e.g. `authorizationCode`, `clientCredentials`
    #[serde(default)]
    pub flows: Vec<String>,
    #[serde(default)]
    pub scopes: BTreeMap<String, String>,
}

impl Oauth2SchemeConfig {
    /// Apply `action` to a fresh definition, then load the scope descriptions file if one was given.
    pub fn configure(project: &Project, action: impl FnOnce(&mut Self)) -> Result<Self> {
        let mut oauth2: Self = configure(action);
        oauth2.load_scope_descriptions(project)?;
        Ok(oauth2)
    }

    fn load_scope_descriptions(&mut self, project: &Project) -> Result<()> {
        let Some(file) = &self.scope_descriptions_file else {
            return Ok(());
        };
        if file.as_os_str().is_empty() {
            return Ok(());
        }
        let path = project.file(file);
        let scopes = load_scope_descriptions(&path)?;
        if !self.scopes.is_empty() {
            log::warn!(
                "Scopes set next to scope-descriptions-file are replaced by the content of {}",
                path.display()
            );
        }
        self.scopes = scopes;
        Ok(())
    }
}
