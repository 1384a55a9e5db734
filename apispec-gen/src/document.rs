//! Settings records of the OpenAPI v2 (`openapi`) and v3 (`openapi3`) documents.

mod base;
mod format;
mod server;
mod settings;
mod v2;
mod v3;

pub use base::*;
pub use format::*;
pub use server::*;
pub use v2::*;
pub use v3::*;

use crate::{Project, Result};
use std::path::PathBuf;

/// Common surface of [V2DocumentConfig] and [V3DocumentConfig], read by the generation step.
pub trait DocumentConfig {
    /// Name of the settings block, also the `[package.metadata.<NAME>]` table it is read from.
    const NAME: &'static str;

    fn base(&self) -> &BaseDocumentConfig;
    fn base_mut(&mut self) -> &mut BaseDocumentConfig;

    /// Check the invariants a generation step relies on.
    fn validate(&self) -> Result<()>;

    fn output_file(&self, project: &Project) -> PathBuf {
        self.base().output_file(project)
    }
}
