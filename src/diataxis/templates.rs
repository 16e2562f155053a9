//! New-document content rendering.
//!
//! Bodies are embedded at compile time from `templates/` and filled in with
//! `{{title}}`, `{{date}}` and, for decision records, `{{number}}`.

use crate::kind::Kind;
use chrono::Local;

const HOWTO: &str = include_str!("../../templates/howto.md");
const TUTORIAL: &str = include_str!("../../templates/tutorial.md");
const EXPLANATION: &str = include_str!("../../templates/explanation.md");
const ADR: &str = include_str!("../../templates/adr.md");
const HANDOVER: &str = include_str!("../../templates/handover.md");
const FIVE_WHY: &str = include_str!("../../templates/fivewhyanalysis.md");
const NOTE: &str = include_str!("../../templates/note.md");
const PROJECT: &str = include_str!("../../templates/project.md");

/// Render the full text of a new document.
///
/// `ordinal` is only meaningful for [`Kind::DecisionRecord`], where it fills
/// the unpadded `{{number}}` in the heading (`# 1. Title`).
pub fn render(kind: Kind, title: &str, ordinal: Option<u32>) -> String {
    let template = match kind {
        Kind::HowTo => HOWTO,
        Kind::Tutorial => TUTORIAL,
        Kind::Explanation => EXPLANATION,
        Kind::DecisionRecord => ADR,
        Kind::Handover => HANDOVER,
        Kind::FiveWhyAnalysis => FIVE_WHY,
        Kind::Note => NOTE,
        Kind::Project => PROJECT,
    };

    let date = Local::now().format("%Y-%m-%d").to_string();
    let mut content = template
        .replace("{{title}}", title)
        .replace("{{date}}", &date);
    if let Some(n) = ordinal {
        content = content.replace("{{number}}", &n.to_string());
    }
    content
}
