//! README index maintenance.
//!
//! Each kind owns one delimited section in the README, bounded by its
//! `<!-- {tag}log -->` / `<!-- {tag}logstop -->` markers. Only the text
//! between a kind's own markers (plus the section heading, when the section
//! empties out) is ever touched; everything else is preserved byte-for-byte.
//! Output always ends with exactly one newline.

use crate::error::Result;
use crate::kind::Kind;
use std::fs;
use std::path::PathBuf;

pub struct ReadmeManager {
    readme_path: PathBuf,
}

impl ReadmeManager {
    pub fn new(readme_path: PathBuf) -> Self {
        Self { readme_path }
    }

    /// Apply every kind's entry list in one pass and write the result once.
    ///
    /// `sections` holds the final post-rename entry lines per kind; kinds
    /// with an empty list have their section removed (or never added).
    pub fn update(&self, sections: &[(Kind, Vec<String>)]) -> Result<()> {
        let content = if self.readme_path.is_file() {
            let mut content = fs::read_to_string(&self.readme_path)?;
            for (kind, entries) in sections {
                content = apply_section(&content, *kind, entries);
            }
            content
        } else {
            self.new_readme(sections)
        };

        let normalized = format!("{}\n", content.trim_end());
        fs::write(&self.readme_path, normalized)?;
        Ok(())
    }

    /// Synthesize a README from scratch: a title from the containing
    /// directory plus one section per kind that has entries.
    fn new_readme(&self, sections: &[(Kind, Vec<String>)]) -> String {
        let dir_name = self
            .readme_path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Documentation".to_string());

        let mut content = format!("# {}\n\n## Description\n\n## Usage\n\n## Appendix\n", dir_name);
        for (kind, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            content.push('\n');
            content.push_str(&section_block(*kind, entries));
            content.push('\n');
        }
        content
    }
}

fn section_block(kind: Kind, entries: &[String]) -> String {
    format!(
        "### {}\n\n{}\n{}\n{}",
        kind.section_title(),
        kind.start_marker(),
        entries.join("\n"),
        kind.end_marker()
    )
}

/// The three-way branch: replace when markers exist and entries remain,
/// remove when the kind emptied out, append when the kind first gains
/// entries. Markers absent and nothing to list means no change.
fn apply_section(content: &str, kind: Kind, entries: &[String]) -> String {
    let has_markers = content.contains(&kind.start_marker());
    match (has_markers, entries.is_empty()) {
        (true, false) => replace_section(content, kind, entries),
        (true, true) => remove_section(content, kind),
        (false, false) => append_section(content, kind, entries),
        (false, true) => content.to_string(),
    }
}

/// Replace the text strictly between each marker pair with the new entries.
fn replace_section(content: &str, kind: Kind, entries: &[String]) -> String {
    let start = kind.start_marker();
    let end = kind.end_marker();
    let block = format!("{}\n{}\n{}", start, entries.join("\n"), end);

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(s) = rest.find(&start) {
        let Some(e) = rest[s..].find(&end) else {
            break;
        };
        out.push_str(&rest[..s]);
        out.push_str(&block);
        rest = &rest[s + e + end.len()..];
    }
    out.push_str(rest);
    out
}

/// Remove each marker block and, when it sits directly below one, the
/// section heading as well, leaving no empty shell behind.
fn remove_section(content: &str, kind: Kind) -> String {
    let start = kind.start_marker();
    let end = kind.end_marker();
    let heading = format!("### {}", kind.section_title());

    let mut out = content.to_string();
    loop {
        let Some(s) = out.find(&start) else {
            break;
        };
        let Some(e) = out[s..].find(&end) else {
            break;
        };

        let mut cut_end = s + e + end.len();
        while out[cut_end..].starts_with('\n') {
            cut_end += 1;
        }

        // Take the heading with us only if nothing but whitespace separates
        // it from the marker block.
        let cut_start = match out[..s].rfind(&heading) {
            Some(h) if out[h + heading.len()..s].trim().is_empty() => h,
            _ => s,
        };

        out.replace_range(cut_start..cut_end, "");
    }
    out
}

/// Append a fresh heading + marker block at the end of the file.
fn append_section(content: &str, kind: Kind, entries: &[String]) -> String {
    format!("{}\n{}\n", content, section_block(kind, entries))
}
