//! Optional `matcat.toml` configuration.
//!
//! ```toml
//! [fmt]
//! width = 72
//!
//! [lint]
//! disable = ["ragged-column"]
//!
//! [lint.severity]
//! "empty-synopsis" = "warning"
//! ```
//!
//! An explicitly passed path must exist; otherwise `./matcat.toml` is used
//! when present, and built-in defaults when not.

use crate::error::{Error, Result};
use matcat_lint::{Linter, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "matcat.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Formatting options.
    #[serde(default)]
    pub fmt: FmtConfig,
    /// Lint rule options.
    #[serde(default)]
    pub lint: LintConfig,
}

/// `[fmt]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FmtConfig {
    /// Target line width; `render` default when absent.
    pub width: Option<usize>,
}

/// `[lint]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Rule ids to disable.
    #[serde(default)]
    pub disable: Vec<String>,
    /// Per-rule severity overrides.
    #[serde(default)]
    pub severity: HashMap<String, Severity>,
}

impl Config {
    /// Loads configuration.
    ///
    /// `explicit` comes from `--config` and must point at an existing file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_file(path)
            }
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::load_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| matcat_core::Error::io_with_path(e, path))?;
        toml::from_str(&text)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Builds a linter with this configuration applied.
    pub fn linter(&self) -> Linter {
        let mut linter = Linter::new();
        for id in &self.lint.disable {
            linter.disable(id.clone());
        }
        for (id, severity) in &self.lint.severity {
            linter.set_severity(id.clone(), *severity);
        }
        linter
    }

    /// Effective formatting width.
    pub fn width(&self) -> usize {
        self.fmt.width.unwrap_or(matcat_content::DEFAULT_WIDTH)
    }
}

// ============================================================================
// Tests
// ============================================================================
