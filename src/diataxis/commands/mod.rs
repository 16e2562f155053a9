//! Business logic for each operation.
//!
//! Commands take a loaded configuration plus plain arguments and return a
//! [`CmdResult`]. They never print; the CLI layer renders the structured
//! messages.

use std::path::PathBuf;

pub mod create;
pub mod init;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Path of a newly created document, if any.
    pub created: Option<PathBuf>,
    /// Renames performed this run, oldest first.
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// README that was written, if any.
    pub readme: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn merge(&mut self, other: CmdResult) {
        self.renamed.extend(other.renamed);
        if other.created.is_some() {
            self.created = other.created;
        }
        if other.readme.is_some() {
            self.readme = other.readme;
        }
        self.messages.extend(other.messages);
    }
}
