//! Resync: re-derive filenames and README sections from current file
//! contents.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::DiataxisConfig;
use crate::error::Result;
use crate::kind::Kind;
use crate::locate;
use crate::markdown;
use crate::readme::ReadmeManager;
use crate::sync;
use std::path::Path;

/// One full synchronization pass over `kinds`.
///
/// Per kind: discover, rename each file to match its title, re-discover,
/// and build index entries with paths relative to the README's directory.
/// Every kind's entries are computed before the single README write, so the
/// index always reflects a consistent snapshot. Running twice without
/// external edits performs zero renames and leaves the README byte-identical.
pub fn run(config: &DiataxisConfig, kinds: &[Kind]) -> Result<CmdResult> {
    let readme_path = config.readme_path();
    let readme_dir = readme_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut result = CmdResult::default();
    let mut sections = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        let base_dir = config.dir_for(kind);

        for file in locate::find_files(kind, config)? {
            let new_path = sync::sync_filename(kind, &file, &base_dir)?;
            if new_path != file {
                result.add_message(CmdMessage::info(format!(
                    "Renamed: {} -> {}",
                    file.display(),
                    new_path.display()
                )));
                result.renamed.push((file, new_path));
            }
        }

        // Re-enumerate so entries see post-rename paths.
        let mut entries = Vec::new();
        for file in locate::find_files(kind, config)? {
            let Some(title) = markdown::extract_title(&file) else {
                continue;
            };
            let relative = pathdiff::diff_paths(&file, &readme_dir).unwrap_or_else(|| file.clone());
            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            entries.push(kind.format_index_entry(
                &title,
                &relative.to_string_lossy(),
                &filename,
            ));
        }
        sections.push((kind, entries));
    }

    ReadmeManager::new(readme_path.clone()).update(&sections)?;
    result.add_message(CmdMessage::success(format!(
        "Updated {}",
        readme_path.display()
    )));
    result.readme = Some(readme_path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) {
        fs::write(root.join(".diataxis"), body).unwrap();
    }

    #[test]
    fn resync_renames_and_indexes() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"howtos": "how-to"}"#);
        let base = temp.path().join("how-to");
        fs::create_dir_all(&base).unwrap();
        fs::write(base.join("how_to_wrong.md"), "# How to recover a backup\n").unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        let result = run(&config, &[Kind::HowTo]).unwrap();

        assert_eq!(result.renamed.len(), 1);
        assert!(base.join("how_to_recover_a_backup.md").is_file());

        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains("* [How to recover a backup](how-to/how_to_recover_a_backup.md)"));
    }

    #[test]
    fn resync_is_idempotent() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"notes": "notes"}"#);
        let base = temp.path().join("notes");
        fs::create_dir_all(&base).unwrap();
        fs::write(base.join("note_anything.md"), "# Quarterly goals\n").unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        run(&config, &[Kind::Note]).unwrap();
        let first = fs::read_to_string(temp.path().join("README.md")).unwrap();

        let second_run = run(&config, &[Kind::Note]).unwrap();
        let second = fs::read_to_string(temp.path().join("README.md")).unwrap();

        assert!(second_run.renamed.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn deleted_documents_drop_their_section() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"tutorials": "tutorials"}"#);
        let base = temp.path().join("tutorials");
        fs::create_dir_all(&base).unwrap();
        let doc = base.join("tutorial_getting_started.md");
        fs::write(&doc, "# Getting Started\n").unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        run(&config, &[Kind::Tutorial]).unwrap();
        assert!(fs::read_to_string(temp.path().join("README.md"))
            .unwrap()
            .contains("### Tutorials"));

        fs::remove_file(&doc).unwrap();
        run(&config, &[Kind::Tutorial]).unwrap();
        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(!readme.contains("### Tutorials"));
        assert!(!readme.contains("tutoriallog"));
    }

    #[test]
    fn titleless_documents_are_not_indexed() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"notes": "."}"#);
        fs::write(temp.path().join("note_indexed.md"), "# Indexed\n").unwrap();
        fs::write(temp.path().join("note_bad.md"), "no heading here\n").unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        let result = run(&config, &[Kind::Note]).unwrap();
        assert!(result.renamed.is_empty());

        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains("* [Indexed](note_indexed.md)"));
        assert!(!readme.contains("note_bad"));
    }

    #[test]
    fn noncanonical_note_is_renamed_then_indexed_under_new_name() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"notes": "."}"#);
        fs::write(temp.path().join("note_good.md"), "# Indexed\n").unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        let result = run(&config, &[Kind::Note]).unwrap();

        assert_eq!(result.renamed.len(), 1);
        assert!(!temp.path().join("note_good.md").exists());
        assert!(temp.path().join("note_indexed.md").is_file());

        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains("* [Indexed](note_indexed.md)"));
        assert!(!readme.contains("note_good.md"));
    }

    #[test]
    fn subdirectory_documents_link_relative_to_readme() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            r#"{"adr": "exp/adr", "readme": "docs/README.md"}"#,
        );
        let base = temp.path().join("exp/adr");
        fs::create_dir_all(&base).unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(
            base.join("0001-use-postgresql-database.md"),
            "# 1. Use PostgreSQL Database\n",
        )
        .unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        run(&config, &[Kind::DecisionRecord]).unwrap();

        let readme = fs::read_to_string(temp.path().join("docs/README.md")).unwrap();
        assert!(readme.contains(
            "* [ADR-0001](../exp/adr/0001-use-postgresql-database.md) - Use PostgreSQL Database"
        ));
    }

    #[test]
    fn hand_written_readme_content_survives_many_passes() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"projects": "projects"}"#);
        fs::create_dir_all(temp.path().join("projects")).unwrap();
        fs::write(
            temp.path().join("projects/project_website_redesign.md"),
            "# Website Redesign\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("README.md"),
            "# Here Be Docs\n\nCarefully worded intro.\n\n## FAQ\n\nNothing yet.\n",
        )
        .unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        for _ in 0..3 {
            run(&config, &[Kind::Project]).unwrap();
        }

        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains("Carefully worded intro."));
        assert!(readme.contains("## FAQ\n\nNothing yet."));
        assert!(readme.contains("* [Website Redesign](projects/project_website_redesign.md)"));
    }

    #[test]
    fn rename_updates_only_that_entry() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"howtos": "."}"#);
        fs::write(temp.path().join("how_to_stay.md"), "# How to stay\n").unwrap();
        fs::write(temp.path().join("how_to_change.md"), "# How to change\n").unwrap();

        let config = DiataxisConfig::load(temp.path()).unwrap();
        run(&config, &[Kind::HowTo]).unwrap();

        // Edit one title externally.
        fs::write(
            temp.path().join("how_to_change.md"),
            "# How to migrate instead\n",
        )
        .unwrap();
        let result = run(&config, &[Kind::HowTo]).unwrap();
        assert_eq!(result.renamed.len(), 1);

        let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
        assert!(readme.contains("* [How to stay](how_to_stay.md)"));
        assert!(readme.contains("* [How to migrate instead](how_to_migrate_instead.md)"));
        assert!(!readme.contains("how_to_change.md"));
    }
}
