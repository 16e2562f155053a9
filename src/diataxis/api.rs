//! # API Facade
//!
//! Thin entry point over the command layer, mirroring how the CLI (or any
//! other client) is expected to drive the library: load a configuration
//! once, then create documents or resync against it. No I/O formatting
//! happens here; commands return structured [`CmdResult`]s.

use crate::commands::{self, CmdResult};
use crate::config::DiataxisConfig;
use crate::error::Result;
use crate::kind::Kind;
use std::path::Path;

pub struct DiataxisApi {
    config: DiataxisConfig,
}

impl DiataxisApi {
    /// Load the nearest configuration above `dir` (or defaults rooted there).
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            config: DiataxisConfig::load(dir)?,
        })
    }

    pub fn config(&self) -> &DiataxisConfig {
        &self.config
    }

    /// Create a document, refreshing the README sections of the kinds that
    /// conventionally accompany `kind`.
    pub fn create_document(&self, kind: Kind, title: &str) -> Result<CmdResult> {
        commands::create::run(
            &self.config,
            kind,
            title,
            commands::create::default_readme_kinds(kind),
        )
    }

    /// Create a document, refreshing exactly the given README sections.
    pub fn create_document_with(
        &self,
        kind: Kind,
        title: &str,
        readme_kinds: &[Kind],
    ) -> Result<CmdResult> {
        commands::create::run(&self.config, kind, title, readme_kinds)
    }

    /// Resync filenames and README sections for the given kinds.
    pub fn update(&self, kinds: &[Kind]) -> Result<CmdResult> {
        commands::update::run(&self.config, kinds)
    }

    /// Resync everything.
    pub fn update_all(&self) -> Result<CmdResult> {
        commands::update::run(&self.config, &Kind::ALL)
    }

    /// Write a default config into `dir`.
    pub fn init(dir: &Path) -> Result<CmdResult> {
        commands::init::run(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn full_lifecycle_through_the_facade() {
        let temp = TempDir::new().unwrap();
        DiataxisApi::init(temp.path()).unwrap();

        let api = DiataxisApi::load(temp.path()).unwrap();
        let created = api
            .create_document(Kind::HowTo, "Rotate the signing keys")
            .unwrap();
        assert!(created.created.is_some());

        let result = api.update_all().unwrap();
        assert!(result.renamed.is_empty());
        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains("* [How to rotate the signing keys](how_to_rotate_the_signing_keys.md)"));
    }
}
