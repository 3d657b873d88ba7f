//! Diagnostics and lint reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How severe a finding is.
///
/// Errors make a report unclean (and fail a CLI lint run); warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory finding.
    Warning,
    /// The catalog violates one of its required properties.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same names serde uses
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Identifier of the rule that produced this finding.
    pub rule: &'static str,
    /// Severity after any configured override.
    pub severity: Severity,
    /// 1-based source line the finding refers to.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new<S: Into<String>>(
        rule: &'static str,
        severity: Severity,
        line: usize,
        message: S,
    ) -> Self {
        Self {
            rule,
            severity,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}[{}]: {}",
            self.line, self.severity, self.rule, self.message
        )
    }
}

/// The outcome of linting one catalog.
///
/// Diagnostics are ordered by source line, then rule id, so output is stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Builds a report, sorting the diagnostics into stable order.
    pub fn new(mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.rule.cmp(b.rule)));
        Self { diagnostics }
    }

    /// All findings, in stable order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Whether the report carries no errors (warnings are fine).
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.error_count(),
            self.warning_count()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::new("empty-synopsis", Severity::Error, 12, "lqe.m has no synopsis");
        assert_eq!(
            d.to_string(),
            "line 12: error[empty-synopsis]: lqe.m has no synopsis"
        );
    }

    #[test]
    fn test_report_sorts_by_line_then_rule() {
        let report = Report::new(vec![
            Diagnostic::new("zz", Severity::Warning, 5, "later"),
            Diagnostic::new("aa", Severity::Warning, 5, "earlier"),
            Diagnostic::new("mm", Severity::Error, 2, "first"),
        ]);
        let order: Vec<(usize, &str)> = report
            .diagnostics()
            .iter()
            .map(|d| (d.line, d.rule))
            .collect();
        assert_eq!(order, vec![(2, "mm"), (5, "aa"), (5, "zz")]);
    }

    #[test]
    fn test_report_counts_and_cleanliness() {
        let report = Report::new(vec![
            Diagnostic::new("a", Severity::Warning, 1, "w"),
            Diagnostic::new("b", Severity::Error, 2, "e"),
        ]);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.is_clean());

        let warnings_only = Report::new(vec![Diagnostic::new("a", Severity::Warning, 1, "w")]);
        assert!(warnings_only.is_clean());
    }

    #[test]
    fn test_severity_serde_names() {
        assert_eq!(
            serde_json::from_str::<Severity>("\"error\"").unwrap(),
            Severity::Error
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"warning\"").unwrap(),
            Severity::Warning
        );
    }
}
