//! Handler functions for the CLI subcommands.
//!
//! Handlers return their output as strings; `main` decides where it goes and
//! which exit code follows. That keeps everything here testable without
//! spawning the binary.

use crate::cli::ExportFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use matcat_core::{Catalog, ScriptName, SectionKind};
use matcat_lint::Report;
use std::fmt::Write as _;
use std::path::Path;

/// Parses and lints a catalog file.
///
/// Returns the report (for the exit code) and the formatted findings, one
/// `file:line: severity[rule]: message` line each plus a summary.
pub fn lint(file: &Path, config: &Config) -> Result<(Report, String)> {
    let catalog = matcat_content::parse_file(file)?;
    let report = config.linter().lint(&catalog);

    if report.diagnostics().is_empty() {
        return Ok((report, format!("{}: clean", file.display())));
    }

    let mut out = String::new();
    for d in report.diagnostics() {
        let _ = writeln!(
            out,
            "{}:{}: {}[{}]: {}",
            file.display(),
            d.line,
            d.severity,
            d.rule,
            d.message
        );
    }
    let _ = write!(
        out,
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
    Ok((report, out))
}

/// Lists entries, optionally restricted to one section kind.
pub fn list(catalog: &Catalog, kind: Option<SectionKind>) -> String {
    let selected: Vec<_> = catalog
        .entries()
        .filter(|(section, _)| kind.is_none_or(|k| section.kind == k))
        .collect();

    let col = selected
        .iter()
        .map(|(_, e)| e.name.as_str().len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    for (_, entry) in selected {
        if entry.synopsis.is_empty() {
            let _ = writeln!(out, "{}", entry.name);
        } else {
            let _ = writeln!(out, "{:<col$}{}", entry.name.as_str(), entry.synopsis);
        }
    }
    out
}

/// Shows every listing of one script.
pub fn show(catalog: &Catalog, name: &str) -> Result<String> {
    let name = ScriptName::new(name)?;
    let hits = catalog.find(&name);
    if hits.is_empty() {
        return Err(Error::NotListed {
            name: name.to_string(),
        });
    }

    let mut out = String::new();
    let _ = writeln!(out, "{name}");
    for (section, entry) in hits {
        let synopsis = if entry.synopsis.is_empty() {
            "(no synopsis)"
        } else {
            &entry.synopsis
        };
        let _ = writeln!(
            out,
            "  {}. {} (line {}): {}",
            section.number, section.title, entry.line, synopsis
        );
    }
    Ok(out)
}

/// Re-renders a catalog file in canonical form.
///
/// Returns the rendered text, or `None` when it was written back to `file`.
pub fn fmt(file: &Path, write: bool, width: usize) -> Result<Option<String>> {
    let catalog = matcat_content::parse_file(file)?;
    let text = matcat_content::render_width(&catalog, width);
    if write {
        std::fs::write(file, &text).map_err(|e| matcat_core::Error::io_with_path(e, file))?;
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Exports a catalog to the requested format.
pub fn export(catalog: &Catalog, format: ExportFormat) -> Result<String> {
    let out = match format {
        ExportFormat::Json => matcat_content::to_json(catalog)?,
        ExportFormat::Csv => matcat_content::to_csv(catalog)?,
    };
    Ok(out)
}

/// Prints section and entry counts.
pub fn stats(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} section(s), {} entr{}",
        catalog.sections.len(),
        catalog.len(),
        if catalog.len() == 1 { "y" } else { "ies" }
    );
    for section in &catalog.sections {
        let _ = writeln!(
            out,
            "  {}. {} ({}): {}",
            section.number,
            section.title,
            section.kind,
            section.entries.len()
        );
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
