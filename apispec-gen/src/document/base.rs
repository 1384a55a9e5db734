use crate::{ConfigError, Format, Oauth2SchemeConfig, Project, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Document metadata shared by the OpenAPI v2 and v3 settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BaseDocumentConfig {
    pub title: String,
    /// Defaults to the project version when the manifest gives it as a string, else `1.0.0`
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub format: Format,
    /// Output directory for generated documents, relative to the project root
    pub output_directory: PathBuf,
    /// Directory the API documentation snippets are read from
    pub snippets_directory: PathBuf,
    /// Also generate a document restricted to the operations marked as public
    pub separate_public_api: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<Oauth2SchemeConfig>,
    output_file_name_prefix: &'static str,
}

impl BaseDocumentConfig {
    pub(crate) fn new(project: &Project, output_file_name_prefix: &'static str) -> Self {
        Self {
            title: default_title(),
            version: default_version(project),
            description: None,
            format: Format::default(),
            output_directory: default_output_directory(),
            snippets_directory: default_snippets_directory(),
            separate_public_api: false,
            oauth2: None,
            output_file_name_prefix,
        }
    }

    /// File name of the generated document without extension, fixed per OpenAPI version.
    pub fn output_file_name_prefix(&self) -> &str {
        self.output_file_name_prefix
    }

    /// Define the OAuth2 security scheme through `action`.
    ///
    /// A `scope_descriptions_file` set by `action` is read right away and replaces any
    /// scopes set by `action`, see [Oauth2SchemeConfig::configure].
    pub fn set_oauth2_security_scheme_definition(
        &mut self,
        project: &Project,
        action: impl FnOnce(&mut Oauth2SchemeConfig),
    ) -> Result<()> {
        self.oauth2 = Some(Oauth2SchemeConfig::configure(project, action)?);
        Ok(())
    }

    /// `<output_directory>/<prefix>.<format>` resolved against the project root.
    pub fn output_file(&self, project: &Project) -> PathBuf {
        project.file(&self.output_directory).join(format!(
            "{}.{}",
            self.output_file_name_prefix,
            self.format.extension()
        ))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::configuration("title must not be empty"));
        }
        if self.output_directory.as_os_str().is_empty() {
            return Err(ConfigError::configuration(
                "output directory must not be empty",
            ));
        }
        Ok(())
    }
}

fn default_title() -> String {
    "API documentation".to_string()
}

fn default_version(project: &Project) -> String {
    match project.version.as_text() {
        Some(version) => version.to_string(),
        None => "1.0.0".to_string(),
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("build/openapi")
}

fn default_snippets_directory() -> PathBuf {
    PathBuf::from("build/generated-snippets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectVersion;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let base = BaseDocumentConfig::new(&Project::new("."), "openapi");
        assert_eq!(base.title, "API documentation");
        assert_eq!(base.description, None);
        assert_eq!(base.format, Format::Json);
        assert_eq!(base.output_directory, PathBuf::from("build/openapi"));
        assert_eq!(
            base.snippets_directory,
            PathBuf::from("build/generated-snippets")
        );
        assert!(!base.separate_public_api);
        assert_eq!(base.oauth2, None);
        assert_eq!(base.output_file_name_prefix(), "openapi");
    }

    #[test_case(ProjectVersion::Text("2.3.1".into()) => "2.3.1" ; "string version")]
    #[test_case(ProjectVersion::Unspecified => "1.0.0" ; "no version")]
    #[test_case(ProjectVersion::Other(toml::Value::Boolean(true)) => "1.0.0" ; "non string version")]
    fn test_default_version(version: ProjectVersion) -> String {
        let mut project = Project::new(".");
        project.version = version;
        BaseDocumentConfig::new(&project, "openapi").version
    }

    #[test]
    fn test_output_file() {
        let project = Project::new("/work/carts");
        let mut base = BaseDocumentConfig::new(&project, "openapi3");
        assert_eq!(
            base.output_file(&project),
            PathBuf::from("/work/carts/build/openapi/openapi3.json")
        );
        base.format = Format::Yaml;
        base.output_directory = PathBuf::from("/tmp/docs");
        assert_eq!(
            base.output_file(&project),
            PathBuf::from("/tmp/docs/openapi3.yaml")
        );
    }

    #[test]
    fn test_set_oauth2_without_file() {
        let project = Project::new(".");
        let mut base = BaseDocumentConfig::new(&project, "openapi");
        base.set_oauth2_security_scheme_definition(&project, |oauth2| {
            oauth2.authorization_url = Some("https://auth.example.com/authorize".to_string());
            oauth2.flows = vec!["authorizationCode".to_string()];
        })
        .unwrap();
        let oauth2 = base.oauth2.unwrap();
        assert_eq!(oauth2.flows, vec!["authorizationCode".to_string()]);
        assert!(oauth2.scopes.is_empty());
    }

    #[test]
    fn test_failed_oauth2_keeps_previous_definition() {
        let project = Project::new("/nonexistent");
        let mut base = BaseDocumentConfig::new(&project, "openapi");
        assert!(base
            .set_oauth2_security_scheme_definition(&project, |oauth2| {
                oauth2.scope_descriptions_file = Some("scopes.yaml".into());
            })
            .is_err());
        assert_eq!(base.oauth2, None);
    }

    #[test]
    fn test_validate() {
        let project = Project::new(".");
        let mut base = BaseDocumentConfig::new(&project, "openapi");
        assert!(base.validate().is_ok());
        base.title = "  ".to_string();
        assert!(matches!(
            base.validate(),
            Err(ConfigError::Configuration(_))
        ));
    }
}
