//! The closed set of document kinds and their per-kind rules.
//!
//! Every other module consults these descriptors; none of them are consulted
//! back. Each kind carries its discovery pattern, canonical-filename rule,
//! filename recognizer, README section metadata, and create-time title
//! normalization as pure associated functions on the enum.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    HowTo,
    Tutorial,
    Explanation,
    DecisionRecord,
    Handover,
    FiveWhyAnalysis,
    Note,
    Project,
}

impl Kind {
    pub const ALL: [Kind; 8] = [
        Kind::HowTo,
        Kind::Tutorial,
        Kind::Explanation,
        Kind::DecisionRecord,
        Kind::Handover,
        Kind::FiveWhyAnalysis,
        Kind::Note,
        Kind::Project,
    ];

    /// Key under which this kind's directory is configured in `.diataxis`.
    pub fn config_key(self) -> &'static str {
        match self {
            Kind::HowTo => "howtos",
            Kind::Tutorial => "tutorials",
            Kind::Explanation => "explanations",
            Kind::DecisionRecord => "adr",
            Kind::Handover => "handovers",
            Kind::FiveWhyAnalysis => "five_why_analyses",
            Kind::Note => "notes",
            Kind::Project => "projects",
        }
    }

    /// Directory used when the config file doesn't name one.
    pub fn default_dir(self) -> &'static str {
        match self {
            Kind::HowTo | Kind::Tutorial | Kind::Explanation => ".",
            Kind::DecisionRecord => "exp/adr",
            Kind::Handover => "docs/handovers",
            Kind::FiveWhyAnalysis => "docs/five_why_analyses",
            Kind::Note => "docs/references/notes",
            Kind::Project => "docs/references/projects",
        }
    }

    /// Glob tail matched against filenames; discovery expands `<dir>/**/<tail>`.
    pub fn file_pattern(self) -> &'static str {
        match self {
            Kind::HowTo => "how_to_*.md",
            Kind::Tutorial => "tutorial_*.md",
            Kind::Explanation => "understanding_*.md",
            Kind::DecisionRecord => "[0-9][0-9][0-9][0-9]-*.md",
            Kind::Handover => "handover_*.md",
            Kind::FiveWhyAnalysis => "5why_*.md",
            Kind::Note => "note_*.md",
            Kind::Project => "project_*.md",
        }
    }

    /// Whether a bare filename belongs to this kind.
    pub fn matches_filename(self, name: &str) -> bool {
        if !name.ends_with(".md") {
            return false;
        }
        match self {
            Kind::HowTo => name.starts_with("how_to_"),
            Kind::Tutorial => name.starts_with("tutorial_"),
            Kind::Explanation => name.starts_with("understanding_"),
            Kind::DecisionRecord => adr_ordinal(name).is_some(),
            Kind::Handover => name.starts_with("handover_"),
            Kind::FiveWhyAnalysis => name.starts_with("5why_"),
            Kind::Note => name.starts_with("note_"),
            Kind::Project => name.starts_with("project_"),
        }
    }

    /// Route an arbitrary filename to its kind, if any claims it.
    pub fn for_filename(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.matches_filename(name))
    }

    /// Heading of this kind's README section.
    pub fn section_title(self) -> &'static str {
        match self {
            Kind::HowTo => "How-To Guides",
            Kind::Tutorial => "Tutorials",
            Kind::Explanation => "Explanations",
            Kind::DecisionRecord => "Design Decisions",
            Kind::Handover => "Handovers",
            Kind::FiveWhyAnalysis => "Five Why Analyses",
            Kind::Note => "Notes",
            Kind::Project => "Projects",
        }
    }

    /// Stem of the HTML-comment markers delimiting this kind's README section.
    pub fn section_tag(self) -> &'static str {
        match self {
            Kind::HowTo => "howto",
            Kind::Tutorial => "tutorial",
            Kind::Explanation => "explanation",
            Kind::DecisionRecord => "adr",
            Kind::Handover => "handover",
            Kind::FiveWhyAnalysis => "fivewhyanalysis",
            Kind::Note => "note",
            Kind::Project => "project",
        }
    }

    pub fn start_marker(self) -> String {
        format!("<!-- {}log -->", self.section_tag())
    }

    pub fn end_marker(self) -> String {
        format!("<!-- {}logstop -->", self.section_tag())
    }

    /// Human name used in CLI messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Kind::HowTo => "how-to",
            Kind::Tutorial => "tutorial",
            Kind::Explanation => "explanation",
            Kind::DecisionRecord => "ADR",
            Kind::Handover => "handover",
            Kind::FiveWhyAnalysis => "five-why analysis",
            Kind::Note => "note",
            Kind::Project => "project",
        }
    }

    /// Create-time title normalization. Resync never calls this; it only
    /// affects what gets written as the first heading of a new document.
    pub fn normalize_title(self, raw: &str) -> String {
        let title = raw.trim();
        match self {
            Kind::HowTo => {
                if starts_with_ci(title, "how to") {
                    title.to_string()
                } else {
                    // Imperative phrase: drop trailing punctuation, lower the verb
                    let action = title.trim_end_matches(['.', '!', '?']).trim_end();
                    let mut chars = action.chars();
                    match chars.next() {
                        Some(first) => format!(
                            "How to {}{}",
                            first.to_lowercase(),
                            chars.as_str()
                        ),
                        None => String::new(),
                    }
                }
            }
            Kind::Explanation => {
                if starts_with_ci(title, "understanding") {
                    title.to_string()
                } else {
                    format!("Understanding {}", title)
                }
            }
            _ => title.to_string(),
        }
    }

    /// The canonical filename for a document with the given title.
    ///
    /// `existing` is the document's current filename, consulted only by
    /// DecisionRecord to carry its zero-padded ordinal across renames.
    pub fn filename_for_title(self, title: &str, existing: Option<&str>) -> String {
        match self {
            Kind::HowTo => {
                format!("how_to_{}.md", slug(strip_prefix_ci(title, "how to "), '_'))
            }
            Kind::Tutorial => format!("tutorial_{}.md", slug(title, '_')),
            Kind::Explanation => format!(
                "understanding_{}.md",
                slug(strip_prefix_ci(title, "understanding "), '_')
            ),
            Kind::DecisionRecord => {
                let ordinal = existing.and_then(adr_ordinal).unwrap_or("0000");
                format!("{}-{}.md", ordinal, slug(strip_adr_ordinal(title), '-'))
            }
            Kind::Handover => format!("handover_{}.md", slug(title, '_')),
            Kind::FiveWhyAnalysis => format!("5why_{}.md", slug(title, '_')),
            Kind::Note => format!("note_{}.md", slug(title, '_')),
            Kind::Project => {
                format!("project_{}.md", slug(strip_project_label(title), '_'))
            }
        }
    }

    /// One line of README markup for a document of this kind.
    pub fn format_index_entry(self, title: &str, relative_path: &str, filename: &str) -> String {
        match self {
            Kind::DecisionRecord => {
                let ordinal = adr_ordinal(filename).unwrap_or("0000");
                format!(
                    "* [ADR-{}]({}) - {}",
                    ordinal,
                    relative_path,
                    strip_adr_ordinal(title)
                )
            }
            _ => format!("* [{}]({})", title, relative_path),
        }
    }
}

/// Lowercase the text and collapse every run of non-alphanumerics into a
/// single separator, trimming separators at both ends.
fn slug(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending && !out.is_empty() {
                out.push(sep);
            }
            pending = false;
            out.push(c);
        } else {
            pending = true;
        }
    }
    out
}

fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> &'a str {
    if starts_with_ci(s, prefix) {
        &s[prefix.len()..]
    } else {
        s
    }
}

/// The 4-digit ordinal prefix of an ADR filename, if it has one.
fn adr_ordinal(name: &str) -> Option<&str> {
    let head = name.get(..4)?;
    if head.bytes().all(|b| b.is_ascii_digit()) && name[4..].starts_with('-') {
        Some(head)
    } else {
        None
    }
}

/// Strip a leading "N. " ordinal from an ADR title ("1. Use X" -> "Use X").
fn strip_adr_ordinal(title: &str) -> &str {
    let digits = title.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = title[digits..].strip_prefix(". ") {
            return rest;
        }
    }
    title
}

/// Strip a leading "Project:" label from a project title.
fn strip_project_label(title: &str) -> &str {
    if starts_with_ci(title, "project:") {
        title["project:".len()..].trim_start()
    } else {
        title
    }
}
