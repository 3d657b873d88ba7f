//! The built-in lint rules.
//!
//! Each rule checks one property of a parsed catalog and appends findings to
//! the shared diagnostic list. Rules never mutate the catalog, and every
//! finding points at a source line taken from the model, so reports are
//! stable across runs.

use crate::diagnostic::{Diagnostic, Severity};
use matcat_core::{Catalog, Entry, ScriptName, SectionKind};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A single catalog check.
///
/// `severity` is the effective severity for ordinary findings, after any
/// configured override; rules may still escalate specific cases (see
/// [`DuplicateEntry`]).
pub trait Rule {
    /// Stable identifier, used for disabling and severity overrides.
    fn id(&self) -> &'static str;
    /// Severity when no override is configured.
    fn default_severity(&self) -> Severity;
    /// Appends findings for `catalog` to `out`.
    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>);
}

/// Every listed filename must carry a synopsis.
pub struct EmptySynopsis;

impl Rule for EmptySynopsis {
    fn id(&self) -> &'static str {
        "empty-synopsis"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>) {
        for (_, entry) in catalog.entries() {
            if entry.synopsis.is_empty() {
                out.push(Diagnostic::new(
                    self.id(),
                    severity,
                    entry.line,
                    format!("{} has no synopsis", entry.name),
                ));
            }
        }
    }
}

/// Printed section ordinals must run 1..=N in order.
pub struct SectionNumbering;

impl Rule for SectionNumbering {
    fn id(&self) -> &'static str {
        "section-numbering"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>) {
        for (i, section) in catalog.sections.iter().enumerate() {
            let expected = (i + 1) as u32;
            if section.number != expected {
                out.push(Diagnostic::new(
                    self.id(),
                    severity,
                    section.line,
                    format!(
                        "section '{}' is numbered {}, expected {}",
                        section.title, section.number, expected
                    ),
                ));
            }
        }
    }
}

/// A filename should be listed once.
///
/// A second listing inside the same section is always an error. Listings in
/// two different sections get the configured severity (warning by default),
/// except when one of the sections is the superseded list — a replaced file
/// legitimately appears both under its old role and there.
pub struct DuplicateEntry;

impl Rule for DuplicateEntry {
    fn id(&self) -> &'static str {
        "duplicate-entry"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>) {
        // name -> every prior occurrence, in document order
        let mut seen: HashMap<&ScriptName, Vec<(usize, &Entry)>> = HashMap::new();

        for (idx, section) in catalog.sections.iter().enumerate() {
            for entry in &section.entries {
                let occurrences = seen.entry(&entry.name).or_default();

                if let Some(&(_, first)) = occurrences.iter().find(|(i, _)| *i == idx) {
                    out.push(Diagnostic::new(
                        self.id(),
                        Severity::Error,
                        entry.line,
                        format!(
                            "{} listed twice in section '{}' (first at line {})",
                            entry.name, section.title, first.line
                        ),
                    ));
                } else if section.kind != SectionKind::Superseded {
                    let prior = occurrences
                        .iter()
                        .find(|(i, _)| catalog.sections[*i].kind != SectionKind::Superseded);
                    if let Some(&(first_idx, first)) = prior {
                        out.push(Diagnostic::new(
                            self.id(),
                            severity,
                            entry.line,
                            format!(
                                "{} listed in both '{}' (line {}) and '{}'",
                                entry.name,
                                catalog.sections[first_idx].title,
                                first.line,
                                section.title
                            ),
                        ));
                    }
                }

                occurrences.push((idx, entry));
            }
        }
    }
}

/// A section header with nothing under it.
pub struct EmptySection;

impl Rule for EmptySection {
    fn id(&self) -> &'static str {
        "empty-section"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>) {
        for section in &catalog.sections {
            if section.entries.is_empty() {
                out.push(Diagnostic::new(
                    self.id(),
                    severity,
                    section.line,
                    format!("section '{}' has no entries", section.title),
                ));
            }
        }
    }
}

/// Synopsis columns should line up within a section.
pub struct RaggedColumn;

impl Rule for RaggedColumn {
    fn id(&self) -> &'static str {
        "ragged-column"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>) {
        for section in &catalog.sections {
            let mut columns = section.entries.iter().filter_map(|e| Some((e, e.synopsis_col?)));
            let Some((_, reference)) = columns.next() else {
                continue;
            };
            for (entry, col) in columns {
                if col != reference {
                    out.push(Diagnostic::new(
                        self.id(),
                        severity,
                        entry.line,
                        format!(
                            "synopsis for {} starts at column {}, section uses {}",
                            entry.name, col, reference
                        ),
                    ));
                }
            }
        }
    }
}

/// Supersession notes must point at files the catalog still lists.
///
/// Scans superseded-section synopses for script-name tokens; each referenced
/// name must exist elsewhere in the catalog. When it does not, the closest
/// listed name by Jaro-Winkler similarity is suggested.
pub struct DanglingSupersession;

/// Similarity floor below which no suggestion is offered.
const SUGGESTION_THRESHOLD: f64 = 0.85;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([a-z][a-z0-9_]{0,7}\.m)\b").expect("invalid reference regex")
});

impl Rule for DanglingSupersession {
    fn id(&self) -> &'static str {
        "dangling-supersession"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, catalog: &Catalog, severity: Severity, out: &mut Vec<Diagnostic>) {
        for section in &catalog.sections {
            if section.kind != SectionKind::Superseded {
                continue;
            }
            for entry in &section.entries {
                for caps in NAME_RE.captures_iter(&entry.synopsis) {
                    let Ok(referenced) = ScriptName::new(&caps[1]) else {
                        continue;
                    };
                    if referenced == entry.name || catalog.contains(&referenced) {
                        continue;
                    }
                    let suggestion = closest_name(catalog, &referenced)
                        .map(|n| format!(" (did you mean {n}?)"))
                        .unwrap_or_default();
                    out.push(Diagnostic::new(
                        self.id(),
                        severity,
                        entry.line,
                        format!(
                            "{} references {} which is not in the catalog{}",
                            entry.name, referenced, suggestion
                        ),
                    ));
                }
            }
        }
    }
}

/// Closest cataloged name to `target`, if any clears the threshold.
fn closest_name<'a>(catalog: &'a Catalog, target: &ScriptName) -> Option<&'a ScriptName> {
    catalog
        .names()
        .into_iter()
        .map(|n| (n, strsim::jaro_winkler(n.as_str(), target.as_str())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(n, _)| n)
}

/// The default rule set, in the order findings should be attempted.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(EmptySynopsis),
        Box::new(SectionNumbering),
        Box::new(DuplicateEntry),
        Box::new(EmptySection),
        Box::new(RaggedColumn),
        Box::new(DanglingSupersession),
    ]
}

// ============================================================================
// Tests
// ============================================================================
