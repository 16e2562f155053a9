//! Write a default `.diataxis` config.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::DiataxisConfig;
use crate::error::Result;
use std::path::Path;

pub fn run(directory: &Path) -> Result<CmdResult> {
    let path = DiataxisConfig::create(directory)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created {} with default configuration",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiataxisError;
    use tempfile::TempDir;

    #[test]
    fn writes_config_file() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path()).unwrap();
        assert!(temp.path().join(".diataxis").is_file());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn fails_on_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = run(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, DiataxisError::NotADirectory(_)));
    }
}
