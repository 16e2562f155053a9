//! First-heading title extraction.
//!
//! A document's title is never stored; it is always re-read from the first
//! `# ` heading of the file, tolerating YAML front matter and HTML comment
//! blocks above it.

use std::fs;
use std::path::Path;

/// Extract the title from a file's first top-level heading.
///
/// A missing or unreadable file yields `None` rather than an error: such a
/// file is simply not a document this run can account for.
pub fn extract_title<P: AsRef<Path>>(path: P) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    title_from_str(&content)
}

/// Scan lines for the first `# ` heading, skipping YAML front matter
/// (delimited by `---` lines) and HTML comments.
///
/// Front matter that opens but never closes skips the rest of the file and
/// yields `None`. Deeper headings (`##`, `###`) before the title are skipped;
/// any other non-blank line ends the scan without a title.
pub fn title_from_str(content: &str) -> Option<String> {
    let mut in_comment = false;
    let mut front_matter_delims = 0u32;

    for line in content.lines() {
        let line = line.trim();

        if in_comment {
            if line.contains("-->") {
                in_comment = false;
            }
            continue;
        }

        if line.starts_with("<!--") {
            in_comment = !line.ends_with("-->");
            continue;
        }

        if line == "---" {
            front_matter_delims += 1;
            continue;
        }

        // Inside front matter, or waiting on a closing delimiter that may
        // never come.
        if front_matter_delims == 1 {
            continue;
        }

        if let Some(title) = line.strip_prefix("# ") {
            return Some(title.trim().to_string());
        }

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Non-blank body content before any heading: no extractable title.
        return None;
    }

    None
}
