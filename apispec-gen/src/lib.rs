//! Settings for generating OpenAPI v2 and v3 documents from API documentation snippets.
//!
//! A build step creates a [V2DocumentConfig] and/or a [V3DocumentConfig] for a [Project],
//! lets the build author adjust them, and reads the finalized values when generating the
//! documents.
//!
//! ```no_run
//! use apispec_gen::{DocumentConfig, Project, V3DocumentConfig};
//!
//! let project = Project::parse_toml("Cargo.toml")?;
//! let mut openapi3 = V3DocumentConfig::new(&project);
//! openapi3.base.title = "Cart API".to_string();
//! openapi3.set_server(|server| {
//!     server.url = "https://carts.example.com".to_string();
//!     server.description = Some("production".to_string());
//! });
//! openapi3.base.set_oauth2_security_scheme_definition(&project, |oauth2| {
//!     oauth2.scope_descriptions_file = Some("scopes.yaml".into());
//! })?;
//! openapi3.validate()?;
//! # Ok::<(), apispec_gen::ConfigError>(())
//! ```

mod document;
mod error;
mod oauth2;
mod project;
mod scope;
mod util;

pub use document::*;
pub use error::ConfigError;
pub use oauth2::Oauth2SchemeConfig;
pub use project::{Project, ProjectVersion};
pub use scope::load_scope_descriptions;
pub use util::configure;

pub type Result<T> = std::result::Result<T, ConfigError>;
