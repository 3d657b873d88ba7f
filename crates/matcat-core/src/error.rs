//! Error types for the matcat core library.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading, building, or exporting a catalog.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A script filename that does not fit the DOS-era `stem.m` shape.
    #[error("Invalid script name '{name}': {reason}")]
    InvalidName {
        /// The offending filename token
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// A line of catalog text that fits no recognized shape.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source text
        line: usize,
        /// What went wrong
        message: String,
    },

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error carrying the path that failed
    #[error("I/O error on {path}: {source}")]
    File {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export failure (CSV writing and similar)
    #[error("Export error: {message}")]
    Export {
        /// What went wrong
        message: String,
    },
}

/// Convenience `Result` type alias for matcat operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an invalid-name error.
    pub fn invalid_name<N, R>(name: N, reason: R) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a parse error at a 1-based source line.
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates an I/O error carrying path context.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an export error.
    pub fn export<S: Into<String>>(message: S) -> Self {
        Error::Export {
            message: message.into(),
        }
    }

    /// Returns the 1-based source line for parse errors, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let err = Error::invalid_name("toolongstem.m", "stem longer than 8 characters");
        assert_eq!(
            err.to_string(),
            "Invalid script name 'toolongstem.m': stem longer than 8 characters"
        );
    }

    #[test]
    fn test_parse_error_carries_line() {
        let err = Error::parse(17, "entry before first section header");
        assert_eq!(err.line(), Some(17));
        assert!(err.to_string().contains("line 17"));
    }

    #[test]
    fn test_io_with_path_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::io_with_path(io, Path::new("contents.txt"));
        assert!(err.to_string().contains("contents.txt"));
    }

    #[test]
    fn test_non_parse_errors_have_no_line() {
        let err = Error::export("broken pipe");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
