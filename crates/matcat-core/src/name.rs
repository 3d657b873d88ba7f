//! Validated script filename newtype.
//!
//! Catalog entries name script files from a DOS-era toolbox disk, so names
//! follow the 8.3 convention with a fixed `.m` extension: a stem of one to
//! eight ASCII characters (letter first, then letters, digits, or `_`).
//! Names are normalized to lowercase; the 1986 filesystem was
//! case-insensitive and the printed catalogs mix cases freely.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum stem length under the 8.3 filename convention.
pub const MAX_STEM_LEN: usize = 8;

/// A validated script filename of the form `stem.m`.
///
/// Construction via [`ScriptName::new`] (or `FromStr`/`TryFrom`) is the only
/// way to obtain a value, so a `ScriptName` held anywhere in a catalog is
/// known to be well-formed.
///
/// # Examples
///
/// ```
/// use matcat_core::ScriptName;
///
/// let name = ScriptName::new("Bode.M").unwrap();
/// assert_eq!(name.as_str(), "bode.m");
/// assert_eq!(name.stem(), "bode");
///
/// assert!(ScriptName::new("bode.mat").is_err());
/// assert!(ScriptName::new("muchtoolong.m").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScriptName(String);

impl ScriptName {
    /// Validates and normalizes a filename token.
    ///
    /// Accepts any case on input; the stored form is lowercase.
    pub fn new<S: AsRef<str>>(token: S) -> Result<Self> {
        let token = token.as_ref();

        let (stem, ext) = token
            .rsplit_once('.')
            .ok_or_else(|| Error::invalid_name(token, "missing '.m' extension"))?;

        if !ext.eq_ignore_ascii_case("m") {
            return Err(Error::invalid_name(
                token,
                format!("extension '.{ext}' is not '.m'"),
            ));
        }
        if stem.is_empty() {
            return Err(Error::invalid_name(token, "empty stem"));
        }
        if stem.len() > MAX_STEM_LEN {
            return Err(Error::invalid_name(
                token,
                format!("stem longer than {MAX_STEM_LEN} characters"),
            ));
        }

        let mut chars = stem.chars();
        // Non-empty, checked above
        if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(Error::invalid_name(token, "stem must start with a letter"));
        }
        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(Error::invalid_name(
                token,
                format!("stem contains invalid character '{bad}'"),
            ));
        }

        Ok(Self(format!("{}.m", stem.to_ascii_lowercase())))
    }

    /// Returns the full name, e.g. `"bode.m"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the stem without the extension, e.g. `"bode"`.
    pub fn stem(&self) -> &str {
        // Always of the form "stem.m"
        &self.0[..self.0.len() - 2]
    }
}

impl fmt::Display for ScriptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ScriptName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ScriptName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ScriptName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<ScriptName> for String {
    fn from(name: ScriptName) -> Self {
        name.0
    }
}

/// Checks whether a token even looks like a script filename.
///
/// Used by the parser to decide between "first column of an entry" and
/// "continuation text". Looser than [`ScriptName::new`]: any dotted token
/// with an `m`/`M` extension qualifies, so that malformed names surface as
/// [`Error::InvalidName`] rather than being silently folded into a synopsis.
pub fn looks_like_script_name(token: &str) -> bool {
    token
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("m"))
}

// ============================================================================
// Tests
// ============================================================================
