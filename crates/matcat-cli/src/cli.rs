//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use matcat_core::SectionKind;
use std::path::PathBuf;

/// matcat - toolbox disk-catalog tooling
#[derive(Parser, Debug)]
#[command(name = "matcat")]
#[command(version, about = "Parse, lint, and format toolbox disk catalogs", long_about = None)]
pub struct Args {
    /// Configuration file path (defaults to ./matcat.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a catalog for consistency problems
    Lint {
        /// Catalog file to check
        file: PathBuf,
    },
    /// List catalog entries
    List {
        /// Catalog file to read
        file: PathBuf,
        /// Restrict to one section kind
        #[arg(long, value_enum)]
        section: Option<SectionArg>,
    },
    /// Show every listing of one script
    Show {
        /// Catalog file to read
        file: PathBuf,
        /// Script name, e.g. `bode.m`
        name: String,
    },
    /// Re-render a catalog in canonical fixed-width form
    Fmt {
        /// Catalog file to read
        file: PathBuf,
        /// Write the result back instead of printing it
        #[arg(long)]
        write: bool,
        /// Target line width (overrides configuration)
        #[arg(long)]
        width: Option<usize>,
    },
    /// Export a catalog to a machine-readable format
    Export {
        /// Catalog file to read
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Print section and entry counts
    Stats {
        /// Catalog file to read
        file: PathBuf,
    },
}

/// Section kinds as CLI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    NewFiles,
    Unlisted,
    Basic,
    Demonstrations,
    Superseded,
    Other,
}

impl From<SectionArg> for SectionKind {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::NewFiles => SectionKind::NewFiles,
            SectionArg::Unlisted => SectionKind::Unlisted,
            SectionArg::Basic => SectionKind::Basic,
            SectionArg::Demonstrations => SectionKind::Demonstrations,
            SectionArg::Superseded => SectionKind::Superseded,
            SectionArg::Other => SectionKind::Other,
        }
    }
}

/// Export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}
