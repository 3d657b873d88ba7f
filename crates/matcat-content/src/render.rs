//! Canonical fixed-width rendering.
//!
//! Rendering normalizes a catalog back into the printed layout: preamble
//! verbatim, `N. Title` headers, one blank line between blocks, and per
//! section a synopsis column two spaces past the longest filename. Long
//! synopses wrap at the target width, continuation lines indented to the
//! synopsis column. Rendered output re-parses to the same content, and
//! re-rendering rendered output is byte-identical.

use matcat_core::name::looks_like_script_name;
use matcat_core::Catalog;

/// Default target line width for wrapping, matching an 80-column printout
/// with a two-column margin.
pub const DEFAULT_WIDTH: usize = 78;

/// Minimum room left for synopsis text regardless of column position.
const MIN_SYNOPSIS_WIDTH: usize = 16;

/// Renders a catalog at [`DEFAULT_WIDTH`].
///
/// # Examples
///
/// ```
/// use matcat_content::{parse, render};
///
/// let catalog = parse("1. Demonstrations\n\nctrldemo.m  Demo.\n").unwrap();
/// let text = render(&catalog);
/// assert_eq!(text, "1. Demonstrations\n\nctrldemo.m  Demo.\n");
/// ```
pub fn render(catalog: &Catalog) -> String {
    render_width(catalog, DEFAULT_WIDTH)
}

/// Renders a catalog, wrapping synopses at the given line width.
pub fn render_width(catalog: &Catalog, width: usize) -> String {
    let mut out = String::new();

    for line in &catalog.preamble {
        out.push_str(line.trim_end());
        out.push('\n');
    }

    for (i, section) in catalog.sections.iter().enumerate() {
        if i > 0 || !catalog.preamble.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}\n", section.number, section.title));

        if section.entries.is_empty() {
            continue;
        }
        out.push('\n');

        let col = section
            .entries
            .iter()
            .map(|e| e.name.as_str().len())
            .max()
            .unwrap_or(0)
            + 2;
        let avail = width.saturating_sub(col).max(MIN_SYNOPSIS_WIDTH);

        for entry in &section.entries {
            if entry.synopsis.is_empty() {
                out.push_str(entry.name.as_str());
                out.push('\n');
                continue;
            }
            for (j, piece) in wrap(&entry.synopsis, avail).iter().enumerate() {
                if j == 0 {
                    out.push_str(&format!("{:<col$}{piece}\n", entry.name.as_str()));
                } else {
                    out.push_str(&format!("{:col$}{piece}\n", ""));
                }
            }
        }
    }

    out
}

/// Greedy word wrap. A single word longer than the width gets its own line.
///
/// No line after the first may begin with a filename-shaped token: the
/// parser reads such a continuation line as a new entry. Break points that
/// would do so pull the preceding word down instead, overshooting the width
/// when necessary.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    let mut i = 1;
    while i < lines.len() {
        let first = lines[i].split_whitespace().next().unwrap_or("");
        if !looks_like_script_name(first) {
            i += 1;
            continue;
        }
        if let Some(pos) = lines[i - 1].rfind(' ') {
            let prev = lines[i - 1].split_off(pos + 1);
            lines[i - 1].pop();
            lines[i] = format!("{prev} {}", lines[i]);
        } else {
            // One word left above; fold the two lines together
            let tail = lines.remove(i);
            let head = &mut lines[i - 1];
            head.push(' ');
            head.push_str(&tail);
        }
    }

    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parse::parse;

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_aligns_to_longest_name() {
        let text = "1. Basic toolbox functions\n\nbode.m  Bode plots.\nctrldemo.m  Demo.\n";
        let rendered = render(&parse(text).unwrap());
        assert!(rendered.contains("bode.m      Bode plots.\n"));
        assert!(rendered.contains("ctrldemo.m  Demo.\n"));
    }

    #[test]
    fn test_render_blank_lines_between_blocks() {
        let text = "\
Title line

1. New files

lqe.m  Estimator design.

2. Demonstrations

ctrldemo.m  Demo.
";
        let rendered = render(&parse(text).unwrap());
        assert_eq!(
            rendered,
            "Title line\n\n1. New files\n\nlqe.m  Estimator design.\n\n2. Demonstrations\n\nctrldemo.m  Demo.\n"
        );
    }

    #[test]
    fn test_render_empty_synopsis_name_only() {
        let text = "1. Files not listed in the User's Guide\n\nabcdchk.m\n";
        let rendered = render(&parse(text).unwrap());
        assert!(rendered.ends_with("abcdchk.m\n"));
    }

    #[test]
    fn test_render_empty_section_has_no_trailing_blank() {
        let text = "1. New files\n\n2. Demonstrations\n\nctrldemo.m  Demo.\n";
        let rendered = render(&parse(text).unwrap());
        assert!(rendered.starts_with("1. New files\n\n2. Demonstrations\n"));
    }

    // ------------------------------------------------------------------------
    // Wrapping
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_wraps_long_synopsis() {
        let text = format!(
            "1. New files\n\ndlsim.m  {}\n",
            "Simulation of discrete-time linear systems with arbitrary inputs \
             and initial conditions specified by the user."
        );
        let catalog = parse(&text).unwrap();
        let rendered = render_width(&catalog, 40);

        let entry_lines: Vec<&str> = rendered
            .lines()
            .filter(|l| l.starts_with("dlsim.m") || l.starts_with(' '))
            .collect();
        assert!(entry_lines.len() > 1, "expected wrapped output");
        for line in &entry_lines {
            assert!(line.len() <= 40, "line too long: {line:?}");
        }
        // Continuation lines are indented to the synopsis column
        assert!(entry_lines[1].starts_with("         "));
    }

    #[test]
    fn test_wrap_single_long_word() {
        let lines = wrap("supercalifragilistic", 8);
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_exact_fit() {
        let lines = wrap("one two", 7);
        assert_eq!(lines, vec!["one two"]);
    }

    #[test]
    fn test_wrap_never_starts_a_line_with_filename_token() {
        let lines = wrap("Superseded by the older lqr.m variant.", 23);
        assert_eq!(lines, vec!["Superseded by the", "older lqr.m variant."]);
    }

    #[test]
    fn test_narrow_width_keeps_filename_references_in_synopsis() {
        let text = "1. Superseded files\n\nric.m  Superseded by the older lqr.m variant.\n";
        let catalog = parse(text).unwrap();
        let rendered = render_width(&catalog, 30);
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(reparsed.len(), 1);
        assert!(catalog.same_content(&reparsed));
    }

    // ------------------------------------------------------------------------
    // Fixed point
    // ------------------------------------------------------------------------

    #[test]
    fn test_rendered_output_reparses_to_same_content() {
        let text = "\
           Control System Toolbox
              Version 2.0  3-Jan-86

1. New files since the last release

lqe.m       Linear quadratic estimator design.
dlsim.m     Simulation of discrete-time linear systems
            with arbitrary inputs.

2. Superseded files

ric.m       Superseded by lqr.m.
";
        let catalog = parse(text).unwrap();
        let rendered = render(&catalog);
        let reparsed = parse(&rendered).unwrap();
        assert!(catalog.same_content(&reparsed));
    }

    #[test]
    fn test_render_is_idempotent() {
        let text = "1. Demonstrations\n\nctrldemo.m     Classical   design tools.\n";
        let catalog = parse(text).unwrap();
        let once = render(&catalog);
        let twice = render(&parse(&once).unwrap());
        assert_eq!(once, twice);
    }
}
