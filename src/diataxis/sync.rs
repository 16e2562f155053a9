//! Rename synchronization: make a file's name match its current title.
//!
//! The filename invariant is that every document's name is derivable from
//! its first heading via its kind's filename rule. External edits break the
//! invariant; this module restores it, renaming in place and never moving a
//! file out of the subdirectory it lives in.

use crate::error::Result;
use crate::kind::Kind;
use crate::markdown;
use std::fs;
use std::path::{Path, PathBuf};

/// Rename `filepath` to the canonical name for its current title, if they
/// differ. Returns the file's final path; when the name is already canonical
/// (or no title can be extracted) no I/O happens and the input path comes
/// back unchanged, so a second pass is always a no-op.
///
/// `base_dir` is the kind's configured directory; the file's subdirectory
/// offset below it is preserved across the rename.
pub fn sync_filename(kind: Kind, filepath: &Path, base_dir: &Path) -> Result<PathBuf> {
    let Some(title) = markdown::extract_title(filepath) else {
        // Titleless documents are skipped, not failed: the index simply
        // won't list them this run.
        return Ok(filepath.to_path_buf());
    };
    let Some(current_name) = filepath.file_name().and_then(|n| n.to_str()) else {
        return Ok(filepath.to_path_buf());
    };

    let canonical = kind.filename_for_title(&title, Some(current_name));
    if canonical == current_name {
        return Ok(filepath.to_path_buf());
    }

    let parent = filepath.parent().unwrap_or(base_dir);
    let target_dir = match parent.strip_prefix(base_dir) {
        Ok(offset) => base_dir.join(offset),
        Err(_) => parent.to_path_buf(),
    };
    let target = target_dir.join(&canonical);
    fs::rename(filepath, &target)?;
    Ok(target)
}

/// Like [`sync_filename`], but with the kind inferred from the current
/// filename. Files no kind recognizes are left untouched.
pub fn sync_any(filepath: &Path, base_dir: &Path) -> Result<PathBuf> {
    let kind = filepath
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(Kind::for_filename);
    match kind {
        Some(kind) => sync_filename(kind, filepath, base_dir),
        None => Ok(filepath.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renames_to_match_edited_title() {
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("how_to_old_name.md");
        fs::write(&old, "# How to configure the firewall\n").unwrap();

        let new = sync_filename(Kind::HowTo, &old, temp.path()).unwrap();
        assert_eq!(new, temp.path().join("how_to_configure_the_firewall.md"));
        assert!(!old.exists());
        assert!(new.exists());
    }

    #[test]
    fn canonical_name_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tutorial_first_steps.md");
        fs::write(&path, "# First Steps\n").unwrap();

        let kept = sync_filename(Kind::Tutorial, &path, temp.path()).unwrap();
        assert_eq!(kept, path);
        assert!(path.exists());
    }

    #[test]
    fn second_pass_does_not_rename_again() {
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("note_scratch.md");
        fs::write(&old, "# Release checklist\n").unwrap();

        let first = sync_filename(Kind::Note, &old, temp.path()).unwrap();
        let second = sync_filename(Kind::Note, &first, temp.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, temp.path().join("note_release_checklist.md"));
    }

    #[test]
    fn preserves_subdirectory_placement() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("networking");
        fs::create_dir_all(&subdir).unwrap();
        let old = subdir.join("how_to_stale.md");
        fs::write(&old, "# How to set up a VPN\n").unwrap();

        let new = sync_filename(Kind::HowTo, &old, temp.path()).unwrap();
        assert_eq!(new, subdir.join("how_to_set_up_a_vpn.md"));
    }

    #[test]
    fn adr_rename_keeps_its_ordinal() {
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("0007-original-wording.md");
        fs::write(&old, "# 7. Adopt Trunk Based Development\n").unwrap();

        let new = sync_filename(Kind::DecisionRecord, &old, temp.path()).unwrap();
        assert_eq!(new, temp.path().join("0007-adopt-trunk-based-development.md"));
    }

    #[test]
    fn titleless_file_is_left_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note_draft.md");
        fs::write(&path, "just some body text without a heading\n").unwrap();

        let kept = sync_filename(Kind::Note, &path, temp.path()).unwrap();
        assert_eq!(kept, path);
        assert!(path.exists());
    }

    #[test]
    fn sync_any_routes_by_filename() {
        let temp = TempDir::new().unwrap();
        let howto = temp.path().join("how_to_x.md");
        fs::write(&howto, "# How to replace a disk\n").unwrap();
        let unknown = temp.path().join("random.md");
        fs::write(&unknown, "# Whatever\n").unwrap();

        let renamed = sync_any(&howto, temp.path()).unwrap();
        assert_eq!(renamed, temp.path().join("how_to_replace_a_disk.md"));

        let kept = sync_any(&unknown, temp.path()).unwrap();
        assert_eq!(kept, unknown);
    }
}
