//! Configuration: the `.diataxis` file.
//!
//! The config file is found by walking upward from the working directory,
//! and every relative path in it (document directories, the README) resolves
//! against the directory *containing the config file* — never against the
//! process cwd. Discovery therefore stays inside the repository that owns
//! the config even when invoked from a nested subdirectory.

use crate::error::{DiataxisError, Result};
use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".diataxis";
const DEFAULT_README: &str = "README.md";

/// On-disk shape of `.diataxis`. Every key is optional; kinds fall back to
/// their built-in default directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub howtos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handovers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_why_analyses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
}

impl ConfigFile {
    fn dir_for(&self, kind: Kind) -> Option<&str> {
        let value = match kind {
            Kind::HowTo => &self.howtos,
            Kind::Tutorial => &self.tutorials,
            Kind::Explanation => &self.explanations,
            Kind::DecisionRecord => &self.adr,
            Kind::Handover => &self.handovers,
            Kind::FiveWhyAnalysis => &self.five_why_analyses,
            Kind::Note => &self.notes,
            Kind::Project => &self.projects,
        };
        value.as_deref()
    }
}

/// A loaded configuration, anchored at the directory containing the config
/// file (the "root"). All path lookups resolve against that root.
#[derive(Debug, Clone)]
pub struct DiataxisConfig {
    root: PathBuf,
    file: ConfigFile,
}

impl DiataxisConfig {
    /// Walk upward from `start` looking for a `.diataxis` file.
    /// Stops at the volume root; nested foreign repositories without their
    /// own config are never treated as a boundary.
    pub fn find(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent.to_path_buf(),
                _ => return None,
            }
        }
    }

    /// Load the nearest config above `dir`, or fall back to defaults rooted
    /// at `dir` itself. Malformed JSON is a hard error.
    pub fn load(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(config_path) => {
                let content = fs::read_to_string(&config_path)?;
                let file: ConfigFile = serde_json::from_str(&content)?;
                let root = config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                Ok(Self { root, file })
            }
            None => Ok(Self {
                root: dir.to_path_buf(),
                file: ConfigFile::default(),
            }),
        }
    }

    /// Write a default `.diataxis` into `dir` and return its path.
    pub fn create(dir: &Path) -> Result<PathBuf> {
        if !dir.is_dir() {
            return Err(DiataxisError::NotADirectory(dir.to_path_buf()));
        }
        let defaults = ConfigFile {
            readme: Some(DEFAULT_README.to_string()),
            howtos: Some(".".to_string()),
            tutorials: Some(".".to_string()),
            adr: Some("exp/adr".to_string()),
            ..ConfigFile::default()
        };
        let path = dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(&defaults)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolved directory for a kind: the configured value (absolute, or
    /// relative to the config root) or the kind's default.
    pub fn dir_for(&self, kind: Kind) -> PathBuf {
        let dir = self.file.dir_for(kind).unwrap_or_else(|| kind.default_dir());
        self.resolve(dir)
    }

    /// Resolved path of the README the index sections live in.
    pub fn readme_path(&self) -> PathBuf {
        let readme = self.file.readme.as_deref().unwrap_or(DEFAULT_README);
        self.resolve(readme)
    }

    fn resolve(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
