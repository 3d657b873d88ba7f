//! Rule set assembly and execution.

use crate::diagnostic::Report;
use crate::diagnostic::Severity;
use crate::rules::{default_rules, Rule};
use matcat_core::Catalog;
use std::collections::{HashMap, HashSet};

/// Runs a set of lint rules over a catalog.
///
/// Rules can be disabled by id and their severities overridden, which is the
/// surface the CLI exposes through `matcat.toml`.
///
/// # Example
///
/// ```
/// use matcat_content::parse;
/// use matcat_lint::{Linter, Severity};
///
/// let catalog = parse("1. New files\n\nlqe.m\n").unwrap();
///
/// let mut linter = Linter::new();
/// linter.set_severity("empty-synopsis", Severity::Warning);
/// let report = linter.lint(&catalog);
///
/// assert!(report.is_clean());
/// assert_eq!(report.warning_count(), 1);
/// ```
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
    disabled: HashSet<String>,
    overrides: HashMap<String, Severity>,
}

impl Linter {
    /// A linter with the default rule set installed.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            disabled: HashSet::new(),
            overrides: HashMap::new(),
        }
    }

    /// A linter with no rules; add them with [`Linter::with_rule`].
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            disabled: HashSet::new(),
            overrides: HashMap::new(),
        }
    }

    /// Adds a rule to the set.
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Disables a rule by id. Unknown ids are ignored.
    pub fn disable<S: Into<String>>(&mut self, id: S) {
        self.disabled.insert(id.into());
    }

    /// Overrides the severity of a rule's ordinary findings.
    pub fn set_severity<S: Into<String>>(&mut self, id: S, severity: Severity) {
        self.overrides.insert(id.into(), severity);
    }

    /// Runs every enabled rule and collects the findings.
    pub fn lint(&self, catalog: &Catalog) -> Report {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            if self.disabled.contains(rule.id()) {
                continue;
            }
            let severity = self
                .overrides
                .get(rule.id())
                .copied()
                .unwrap_or_else(|| rule.default_severity());
            rule.check(catalog, severity, &mut diagnostics);
        }
        Report::new(diagnostics)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
