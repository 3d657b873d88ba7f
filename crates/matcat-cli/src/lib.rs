//! # matcat-cli
//!
//! Command-line interface for matcat catalog tooling:
//! - `lint`: consistency checks with configurable rules
//! - `list` / `show` / `stats`: catalog queries
//! - `fmt`: canonical fixed-width re-rendering
//! - `export`: JSON and CSV output

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};
