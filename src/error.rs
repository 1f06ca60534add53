//! Error handling for the sales analysis pipeline.
//!
//! Failures fall into three groups:
//!
//! - **I/O** ([`AnalyserError::FileNotFound`], [`AnalyserError::Io`]): the
//!   input file is missing or unreadable. Fatal.
//! - **Malformed table** ([`AnalyserError::Parse`],
//!   [`AnalyserError::MissingColumns`]): the file is not a usable delimited
//!   table. Fatal.
//! - **Per-cell score parsing**: never surfaces here. The cleaner turns an
//!   unparseable score into a null instead.
//!
//! ```
//! use vgsales_insights::error::AnalyserError;
//!
//! fn describe(err: &AnalyserError) -> &'static str {
//!     match err {
//!         AnalyserError::FileNotFound(_) | AnalyserError::Io(_) => "cannot read input",
//!         AnalyserError::Parse(_) | AnalyserError::MissingColumns(_) => "bad table",
//!         AnalyserError::Other(_) => "other",
//!     }
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for analysis operations.
#[derive(Debug)]
pub enum AnalyserError {
    /// The input path does not exist
    FileNotFound(PathBuf),

    /// Any other I/O failure while reading the input
    Io(std::io::Error),

    /// The file could not be read as a delimited table, or a sales column
    /// holds a non-numeric value
    Parse(String),

    /// One or more required columns are absent from the header
    MissingColumns(Vec<String>),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for AnalyserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(msg) => write!(f, "Failed to parse table: {msg}"),
            Self::MissingColumns(cols) => write!(f, "Missing column(s): {}", cols.join(", ")),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AnalyserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalyserError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for AnalyserError {
    fn from(err: polars::error::PolarsError) -> Self {
        match err {
            polars::error::PolarsError::IO { error, .. } => Self::Io(std::io::Error::new(
                error.kind(),
                error.to_string(),
            )),
            other => Self::Parse(other.to_string()),
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = AnalyserError::MissingColumns(vec!["Genre".to_owned(), "Publisher".to_owned()]);
        assert_eq!(err.to_string(), "Missing column(s): Genre, Publisher");
    }

    #[test]
    fn test_file_not_found_display() {
        let err = AnalyserError::FileNotFound(PathBuf::from("video_games.csv"));
        assert_eq!(err.to_string(), "File not found: video_games.csv");
    }

    #[test]
    fn test_polars_error_maps_to_parse() {
        let err: AnalyserError =
            polars::error::PolarsError::NoData("empty CSV".into()).into();
        assert!(matches!(err, AnalyserError::Parse(_)));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: AnalyserError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, AnalyserError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
