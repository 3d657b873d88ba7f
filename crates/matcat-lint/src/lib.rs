//! matcat Lint — consistency checks for parsed catalogs.
//!
//! The parser guarantees structure (every entry sits in exactly one section,
//! every name is well-formed); this crate checks the properties a structurally
//! valid catalog can still get wrong: filenames without synopses, section
//! ordinals out of sequence, duplicate listings, ragged synopsis columns, and
//! supersession notes pointing at files the disk does not carry.
//!
//! # Example
//!
//! ```
//! use matcat_content::parse;
//! use matcat_lint::Linter;
//!
//! let catalog = parse("1. New files\n\nlqe.m\n").unwrap();
//! let report = Linter::new().lint(&catalog);
//!
//! assert!(!report.is_clean());
//! assert_eq!(report.diagnostics()[0].rule, "empty-synopsis");
//! ```

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod linter;
pub mod rules;

pub use diagnostic::{Diagnostic, Report, Severity};
pub use linter::Linter;
pub use rules::Rule;
