use apispec_gen::{DocumentConfig, Project, V2DocumentConfig, V3DocumentConfig};
use serde::Serialize;
use std::path::Path;

/// Both document settings of a project, as handed to the generation step.
#[derive(Debug, Serialize)]
pub struct OpenApiSettings {
    pub openapi: V2DocumentConfig,
    pub openapi3: V3DocumentConfig,
}

/// Read and validate the settings declared in this crate's own manifest.
pub fn openapi_settings() -> anyhow::Result<(Project, OpenApiSettings)> {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let project = Project::parse_toml(manifest)?;
    let settings = OpenApiSettings {
        openapi: V2DocumentConfig::from_project(&project)?,
        openapi3: V3DocumentConfig::from_project(&project)?,
    };
    settings.openapi.validate()?;
    settings.openapi3.validate()?;
    Ok((project, settings))
}
