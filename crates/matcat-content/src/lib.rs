//! Parsing, rendering, and export of toolbox disk-catalog text.
//!
//! The on-disk format is the one used by 1980s toolbox README files: free
//! preamble lines, numbered section headers, and per section a fixed-width
//! two-column table of script filenames and one-line synopses:
//!
//! ```text
//!             Control System Toolbox
//!                Version 2.0  3-Jan-86
//!
//! 1. New files since the last release
//!
//! lqe.m        Linear quadratic estimator design.
//! abcdchk.m    Check consistency of A,B,C,D matrices.
//!
//! 2. Superseded files
//!
//! ric.m        Superseded by lqr.m.
//! ```
//!
//! # Modules
//!
//! - [`parse`]: text to [`matcat_core::Catalog`]
//! - [`render`]: canonical fixed-width rendering
//! - [`export`]: JSON and CSV export

#![forbid(unsafe_code)]

pub mod export;
pub mod parse;
pub mod render;

pub use export::{from_json, to_csv, to_json};
pub use parse::{parse, parse_file};
pub use render::{render, render_width, DEFAULT_WIDTH};
