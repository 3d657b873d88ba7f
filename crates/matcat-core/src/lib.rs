//! matcat Core — catalog data model, shared errors, and name validation.
//!
//! This crate provides the foundational types used across all matcat crates.
//! It has no internal matcat dependencies (dependency level 0).
//!
//! A *catalog* is the machine form of a toolbox disk README: free preamble
//! lines, then numbered sections, each holding a fixed-width two-column list
//! of script filenames and one-line synopses.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`name`]: Validated script filename newtype
//! - [`catalog`]: Entry, Section, and Catalog types

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod name;

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, Entry, Section, SectionKind};
pub use error::{Error, Result};
pub use name::ScriptName;

#[cfg(test)]
mod proptests;
