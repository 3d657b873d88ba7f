//! Catalog entry, section, and document types.
//!
//! A [`Catalog`] mirrors the printed structure of a toolbox disk README:
//! optional preamble lines, then numbered sections, each listing scripts
//! with one-line synopses. Every entry lives in exactly one section; the
//! parser in `matcat-content` enforces this, and the linter in `matcat-lint`
//! checks the properties the model itself cannot (non-empty synopses,
//! sequential numbering, duplicates).

use crate::name::ScriptName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog line: a script filename and its one-line synopsis.
///
/// An empty synopsis is representable — parsed catalogs keep whatever the
/// document said, and the `empty-synopsis` lint reports the gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The script filename.
    pub name: ScriptName,
    /// Free-text description, continuation lines joined with single spaces.
    pub synopsis: String,
    /// 1-based line of the name column in the source text.
    pub line: usize,
    /// 0-based column where the synopsis started in the source text, when
    /// known. Used by the alignment lint; canonical rendering recomputes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis_col: Option<usize>,
}

impl Entry {
    /// Creates an entry with no recorded synopsis column.
    pub fn new<S: Into<String>>(name: ScriptName, synopsis: S, line: usize) -> Self {
        Self {
            name,
            synopsis: synopsis.into(),
            line,
            synopsis_col: None,
        }
    }

    /// Sets the observed synopsis column.
    pub fn with_col(mut self, col: usize) -> Self {
        self.synopsis_col = Some(col);
        self
    }
}

/// The role a section plays in the catalog, recognized from its header text.
///
/// The 1986 disk READMEs use a small recurring vocabulary; anything outside
/// it is [`SectionKind::Other`] and still parses fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Files added since the previous release.
    NewFiles,
    /// Files present on the disk but not listed in the printed guide.
    Unlisted,
    /// The basic toolbox functions.
    Basic,
    /// Demonstration scripts.
    Demonstrations,
    /// Files superseded by newer ones.
    Superseded,
    /// Any unrecognized header.
    Other,
}

impl SectionKind {
    /// Classifies a header title by keyword, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use matcat_core::SectionKind;
    ///
    /// assert_eq!(
    ///     SectionKind::classify("New files since the last release"),
    ///     SectionKind::NewFiles
    /// );
    /// assert_eq!(SectionKind::classify("Superseded files"), SectionKind::Superseded);
    /// assert_eq!(SectionKind::classify("Installation notes"), SectionKind::Other);
    /// ```
    pub fn classify(title: &str) -> Self {
        let t = title.to_ascii_lowercase();
        if t.contains("supersed") || t.contains("obsolete") {
            SectionKind::Superseded
        } else if t.contains("demo") {
            SectionKind::Demonstrations
        } else if t.contains("not listed") || t.contains("unlisted") {
            SectionKind::Unlisted
        } else if t.contains("basic") {
            SectionKind::Basic
        } else if t.contains("new file") || t.contains("new function") {
            SectionKind::NewFiles
        } else {
            SectionKind::Other
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionKind::NewFiles => "new-files",
            SectionKind::Unlisted => "unlisted",
            SectionKind::Basic => "basic",
            SectionKind::Demonstrations => "demonstrations",
            SectionKind::Superseded => "superseded",
            SectionKind::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A numbered section of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The ordinal printed in the header (`3` in `3. Basic toolbox functions`).
    pub number: u32,
    /// Header text without the ordinal.
    pub title: String,
    /// Recognized role of this section.
    pub kind: SectionKind,
    /// Entries in document order.
    pub entries: Vec<Entry>,
    /// 1-based line of the header in the source text.
    pub line: usize,
}

impl Section {
    /// Creates an empty section, classifying the kind from the title.
    pub fn new<S: Into<String>>(number: u32, title: S, line: usize) -> Self {
        let title = title.into();
        let kind = SectionKind::classify(&title);
        Self {
            number,
            title,
            kind,
            entries: Vec::new(),
            line,
        }
    }

    /// Looks up an entry by name within this section.
    pub fn entry(&self, name: &ScriptName) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.name == name)
    }
}

/// A parsed toolbox disk catalog.
///
/// # Examples
///
/// ```
/// use matcat_core::{Catalog, Entry, ScriptName, Section, SectionKind};
///
/// let mut catalog = Catalog::default();
/// let mut basic = Section::new(1, "Basic toolbox functions", 1);
/// basic.entries.push(Entry::new(
///     ScriptName::new("bode.m").unwrap(),
///     "Bode frequency response plots.",
///     3,
/// ));
/// catalog.sections.push(basic);
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.section(SectionKind::Basic).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Title and date lines before the first section header, kept verbatim.
    pub preamble: Vec<String>,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Whether the catalog has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all entries in document order, with their sections.
    pub fn entries(&self) -> impl Iterator<Item = (&Section, &Entry)> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter().map(move |e| (s, e)))
    }

    /// All occurrences of a script name, in document order.
    ///
    /// More than one occurrence is legitimate when a file is listed both in a
    /// content section and in the superseded section.
    pub fn find(&self, name: &ScriptName) -> Vec<(&Section, &Entry)> {
        self.entries().filter(|(_, e)| &e.name == name).collect()
    }

    /// First section of the given kind, if any.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Sorted, deduplicated list of all script names in the catalog.
    pub fn names(&self) -> Vec<&ScriptName> {
        let mut names: Vec<&ScriptName> = self.entries().map(|(_, e)| &e.name).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Whether any section lists this name.
    pub fn contains(&self, name: &ScriptName) -> bool {
        self.entries().any(|(_, e)| &e.name == name)
    }

    /// Compares two catalogs ignoring source positions.
    ///
    /// Re-rendering a catalog moves every line and column, so derived `Eq`
    /// (which covers positions) is the wrong tool for "same document".
    pub fn same_content(&self, other: &Catalog) -> bool {
        self.preamble == other.preamble
            && self.sections.len() == other.sections.len()
            && self.sections.iter().zip(&other.sections).all(|(a, b)| {
                a.number == b.number
                    && a.title == b.title
                    && a.kind == b.kind
                    && a.entries.len() == b.entries.len()
                    && a.entries
                        .iter()
                        .zip(&b.entries)
                        .all(|(x, y)| x.name == y.name && x.synopsis == y.synopsis)
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
