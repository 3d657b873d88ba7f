//! Catalog text parsing.
//!
//! The parser is a single pass over the lines of the document. Line shapes,
//! in matching order:
//!
//! - blank line: separator, ends any continuation
//! - section header: `N. Title` or `N) Title`, ordinal starting within the
//!   first four columns; an immediately following `-`/`=` underline is
//!   consumed
//! - entry: a script-filename token, a column gap, the synopsis
//! - continuation: an indented line directly after an entry, appended to
//!   that entry's synopsis
//! - anything before the first header that is not an entry: preamble
//!
//! Every entry belongs to exactly one section: an entry-shaped line before
//! the first header is a parse error, as is an unrecognizable line inside a
//! section. Synopsis whitespace is normalized, so continuation joining and
//! later re-wrapping cannot change the text.

use matcat_core::name::looks_like_script_name;
use matcat_core::{Catalog, Entry, Error, Result, Section};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}(\d+)[.)]\s+(\S.*)$").expect("invalid section header regex")
});

static UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-=]{2,}\s*$").expect("invalid underline regex"));

/// Parses a whole catalog document.
///
/// # Examples
///
/// ```
/// use matcat_content::parse;
///
/// let text = "\
/// 1. Basic toolbox functions
///
/// bode.m    Bode frequency response plots.
/// lqr.m     Linear quadratic regulator design.
/// ";
/// let catalog = parse(text).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.sections[0].number, 1);
/// ```
pub fn parse(text: &str) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    let mut current: Option<Section> = None;
    // Continuation lines attach to the most recent entry, until a blank line
    let mut continuing = false;
    let mut after_header = false;

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim_end();

        if line.trim().is_empty() {
            continuing = false;
            after_header = false;
            continue;
        }

        if after_header && UNDERLINE_RE.is_match(line) {
            after_header = false;
            continue;
        }

        if let Some(caps) = HEADER_RE.captures(line) {
            let number: u32 = caps[1]
                .parse()
                .map_err(|_| Error::parse(lineno, "section ordinal out of range"))?;
            if let Some(done) = current.take() {
                catalog.sections.push(done);
            }
            current = Some(Section::new(number, caps[2].trim(), lineno));
            after_header = true;
            continuing = false;
            continue;
        }
        after_header = false;

        let indent = line.len() - line.trim_start().len();
        let trimmed = line.trim_start();
        let token = trimmed.split_whitespace().next().unwrap_or("");

        if looks_like_script_name(token) {
            let section = current
                .as_mut()
                .ok_or_else(|| Error::parse(lineno, "entry before first section header"))?;
            let name = matcat_core::ScriptName::new(token).map_err(|e| match e {
                Error::InvalidName { name, reason } => {
                    Error::parse(lineno, format!("invalid script name '{name}': {reason}"))
                }
                other => other,
            })?;

            let rest = &trimmed[token.len()..];
            let gap = rest.len() - rest.trim_start().len();
            let synopsis = rest.trim();
            let mut entry = Entry::new(name, normalize(synopsis), lineno);
            if !synopsis.is_empty() {
                if gap < 2 {
                    log::warn!("line {lineno}: single-space column gap after '{token}'");
                }
                entry = entry.with_col(indent + token.len() + gap);
            }
            section.entries.push(entry);
            continuing = true;
            continue;
        }

        if indent > 0 && continuing {
            // Continuation of the previous entry's synopsis
            let section = current.as_mut().ok_or_else(|| {
                Error::parse(lineno, "continuation line outside any section")
            })?;
            let entry = section
                .entries
                .last_mut()
                .ok_or_else(|| Error::parse(lineno, "continuation line with no entry"))?;
            if let Some(col) = entry.synopsis_col {
                if indent < col {
                    log::warn!("line {lineno}: continuation indented short of column {col}");
                }
            }
            if !entry.synopsis.is_empty() {
                entry.synopsis.push(' ');
            }
            entry.synopsis.push_str(&normalize(trimmed));
            continue;
        }

        match current {
            None => catalog.preamble.push(line.to_string()),
            Some(ref section) => {
                return Err(Error::parse(
                    lineno,
                    format!("unrecognized line in section '{}'", section.title),
                ));
            }
        }
    }

    if let Some(done) = current.take() {
        catalog.sections.push(done);
    }
    Ok(catalog)
}

/// Reads and parses a catalog file, keeping the path in I/O errors.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    parse(&text)
}

/// Collapses internal whitespace runs to single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use matcat_core::SectionKind;

    // ------------------------------------------------------------------------
    // Basic structure
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_minimal_catalog() {
        let text = "1. Basic toolbox functions\n\nbode.m    Bode frequency response plots.\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.sections[0].kind, SectionKind::Basic);
        assert_eq!(catalog.sections[0].entries[0].name.as_str(), "bode.m");
        assert_eq!(
            catalog.sections[0].entries[0].synopsis,
            "Bode frequency response plots."
        );
    }

    #[test]
    fn test_parse_preamble_kept() {
        let text = "\
        Control System Toolbox\n           Version 2.0  3-Jan-86\n\n1. Demonstrations\n\nctrldemo.m  Classical design tools.\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.preamble.len(), 2);
        assert!(catalog.preamble[0].contains("Control System Toolbox"));
    }

    #[test]
    fn test_parse_multiple_sections() {
        let text = "\
1. New files since the last release

lqe.m       Linear quadratic estimator design.

2. Superseded files

ric.m       Superseded by lqr.m.
";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.sections[0].kind, SectionKind::NewFiles);
        assert_eq!(catalog.sections[1].kind, SectionKind::Superseded);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_parse_paren_ordinal_and_underline() {
        let text = "\
1) Basic toolbox functions
---------------------------

nyquist.m   Nyquist frequency response plots.
";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.sections[0].number, 1);
        assert_eq!(catalog.sections[0].title, "Basic toolbox functions");
        assert_eq!(catalog.len(), 1);
    }

    // ------------------------------------------------------------------------
    // Entries and continuations
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_continuation_joined() {
        let text = "\
1. Basic toolbox functions

dlsim.m     Simulation of discrete-time linear systems
            with arbitrary inputs.
";
        let catalog = parse(text).unwrap();
        assert_eq!(
            catalog.sections[0].entries[0].synopsis,
            "Simulation of discrete-time linear systems with arbitrary inputs."
        );
    }

    #[test]
    fn test_parse_empty_synopsis() {
        let text = "1. Files not listed in the User's Guide\n\nabcdchk.m\n";
        let catalog = parse(text).unwrap();
        let entry = &catalog.sections[0].entries[0];
        assert!(entry.synopsis.is_empty());
        assert_eq!(entry.synopsis_col, None);
    }

    #[test]
    fn test_parse_records_synopsis_column() {
        let text = "1. Basic toolbox functions\n\nbode.m      Bode plots.\nlqr.m       Regulator design.\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.sections[0].entries[0].synopsis_col, Some(12));
        assert_eq!(catalog.sections[0].entries[1].synopsis_col, Some(12));
    }

    #[test]
    fn test_parse_indented_entry_is_entry_not_continuation() {
        let text = "\
1. Basic toolbox functions

bode.m      Bode plots.
  lqr.m     Regulator design.
";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.sections[0].entries.len(), 2);
        assert_eq!(catalog.sections[0].entries[1].name.as_str(), "lqr.m");
    }

    #[test]
    fn test_parse_normalizes_internal_whitespace() {
        let text = "1. Demonstrations\n\nctrldemo.m   Classical   control    design.\n";
        let catalog = parse(text).unwrap();
        assert_eq!(
            catalog.sections[0].entries[0].synopsis,
            "Classical control design."
        );
    }

    #[test]
    fn test_parse_entry_lines_recorded() {
        let text = "1. Demonstrations\n\nctrldemo.m   Classical control design.\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.sections[0].line, 1);
        assert_eq!(catalog.sections[0].entries[0].line, 3);
    }

    // ------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------

    #[test]
    fn test_entry_before_first_header_rejected() {
        let text = "bode.m    Bode plots.\n\n1. Basic toolbox functions\n";
        let err = parse(text).unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(err.to_string().contains("before first section header"));
    }

    #[test]
    fn test_invalid_script_name_rejected_with_line() {
        let text = "1. New files\n\nmuchtoolong.m   Stem is nine characters.\n";
        let err = parse(text).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("muchtoolong.m"));
    }

    #[test]
    fn test_unrecognized_line_in_section_rejected() {
        let text = "1. New files\n\nThis prose does not belong here.\n";
        let err = parse(text).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_continuation_after_blank_line_rejected() {
        let text = "\
1. New files

lqe.m    Estimator design.

         stray indented line.
";
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_empty_input_is_empty_catalog() {
        let catalog = parse("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.sections.is_empty());
        assert!(catalog.preamble.is_empty());
    }

    // ------------------------------------------------------------------------
    // parse_file
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contents.txt");
        std::fs::write(&path, "1. Demonstrations\n\nctrldemo.m  Demo.\n").unwrap();

        let catalog = parse_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_file_missing_carries_path() {
        let err = parse_file("no/such/contents.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/contents.txt"));
    }
}
