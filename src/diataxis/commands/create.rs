//! Create a new document and refresh the README.

use crate::commands::{update, CmdMessage, CmdResult};
use crate::config::DiataxisConfig;
use crate::error::{DiataxisError, Result};
use crate::kind::Kind;
use crate::templates;
use std::fs;
use std::path::Path;

/// Kinds whose README sections a creation of `kind` refreshes.
///
/// Creating a prose document only touches the prose sections; creating an
/// ADR leaves the reference sections alone.
pub fn default_readme_kinds(kind: Kind) -> &'static [Kind] {
    const PROSE: &[Kind] = &[Kind::HowTo, Kind::Tutorial, Kind::Explanation];
    const ADR: &[Kind] = &[Kind::HowTo, Kind::Tutorial, Kind::DecisionRecord];
    const HANDOVER: &[Kind] = &[
        Kind::HowTo,
        Kind::Tutorial,
        Kind::Explanation,
        Kind::Handover,
    ];
    const FIVE_WHY: &[Kind] = &[
        Kind::HowTo,
        Kind::Tutorial,
        Kind::Explanation,
        Kind::Handover,
        Kind::FiveWhyAnalysis,
    ];
    const NOTE: &[Kind] = &[
        Kind::HowTo,
        Kind::Tutorial,
        Kind::Explanation,
        Kind::Handover,
        Kind::FiveWhyAnalysis,
        Kind::Note,
    ];
    const PROJECT: &[Kind] = &[
        Kind::HowTo,
        Kind::Tutorial,
        Kind::Explanation,
        Kind::Handover,
        Kind::FiveWhyAnalysis,
        Kind::Note,
        Kind::Project,
    ];

    match kind {
        Kind::HowTo | Kind::Tutorial | Kind::Explanation => PROSE,
        Kind::DecisionRecord => ADR,
        Kind::Handover => HANDOVER,
        Kind::FiveWhyAnalysis => FIVE_WHY,
        Kind::Note => NOTE,
        Kind::Project => PROJECT,
    }
}

/// Create a document of `kind` titled `raw_title`, then run a README pass
/// over `readme_kinds`.
///
/// The title is normalized per kind before anything touches the disk; an
/// empty result is a validation error.
pub fn run(
    config: &DiataxisConfig,
    kind: Kind,
    raw_title: &str,
    readme_kinds: &[Kind],
) -> Result<CmdResult> {
    let title = kind.normalize_title(raw_title);
    if raw_title.trim().is_empty() || title.is_empty() {
        return Err(DiataxisError::Validation(format!(
            "{} title cannot be empty",
            kind.display_name()
        )));
    }

    let dir = config.dir_for(kind);
    fs::create_dir_all(&dir)?;

    let (filename, ordinal) = match kind {
        Kind::DecisionRecord => {
            let next = next_adr_ordinal(&dir)?;
            let name = kind.filename_for_title(&title, Some(&format!("{:04}-", next)));
            (name, Some(next))
        }
        _ => (kind.filename_for_title(&title, None), None),
    };

    let path = dir.join(filename);
    fs::write(&path, templates::render(kind, &title, ordinal))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created new {}: {}",
        kind.display_name(),
        path.display()
    )));
    result.created = Some(path);

    result.merge(update::run(config, readme_kinds)?);
    Ok(result)
}

/// Next free ADR number: one past the highest 4-digit prefix already in the
/// directory (subdirectories don't participate in numbering).
fn next_adr_ordinal(dir: &Path) -> Result<u32> {
    let mut highest = 0u32;
    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if Kind::DecisionRecord.matches_filename(name) {
                if let Ok(n) = name[..4].parse::<u32>() {
                    highest = highest.max(n);
                }
            }
        }
    }
    Ok(highest + 1)
}
