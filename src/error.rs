//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// Malformed corpus file.
    Xml { path: PathBuf, err: roxmltree::Error },
    /// A word list contains an empty line (1-based line number).
    EmptyWordListLine { path: PathBuf, line: usize },
    /// Mini-document bounds where `min >= max`.
    InvalidBounds { min: usize, max: usize },
    /// A record dump announced more records than it holds.
    TruncatedRecords { expected: usize, found: usize },
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {}", e),
            Error::Xml { path, err } => write!(f, "xml error in {:?}: {}", path, err),
            Error::EmptyWordListLine { path, line } => {
                write!(f, "empty line {} in word list {:?}", line, path)
            }
            Error::InvalidBounds { min, max } => write!(
                f,
                "invalid mini-document bounds: minimum ({}) must be less than maximum ({})",
                min, max
            ),
            Error::TruncatedRecords { expected, found } => write!(
                f,
                "truncated record dump: expected {} records, found {}",
                expected, found
            ),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
