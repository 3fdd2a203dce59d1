use std::{fmt, io};

/// Crate-wide `Result` type using [`PathcompError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, PathcompError>;

/// Top-level error type for pathcomp operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate. The completion
/// operation itself never returns these to its caller: every failure
/// class normalizes to an empty candidate list there, and the kinds
/// below exist for configuration loading, the CLI surface, and
/// diagnostic logging.
#[derive(Debug)]
pub enum PathcompError {
    /// Search pipeline errors.
    Search(SearchError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Search-pipeline errors, one variant per failure class of a
/// completion request.
#[derive(Debug)]
pub enum SearchError {
    /// The resolved base directory does not exist or is not a directory.
    InvalidBaseDirectory(String),

    /// The external lister could not be spawned.
    LaunchFailed(String),

    /// The external lister exited with a non-zero status.
    NonZeroExit(Option<i32>),

    /// The external lister outlived the configured timeout.
    Timeout,
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for PathcompError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathcompError::Search(e) => write!(f, "Search error: {e}"),
            PathcompError::Config(e) => write!(f, "Configuration error: {e}"),
            PathcompError::Io(e) => write!(f, "I/O error: {e}"),
            PathcompError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidBaseDirectory(path) => {
                write!(f, "Invalid base directory: {path}")
            }
            SearchError::LaunchFailed(msg) => write!(f, "Failed to launch lister: {msg}"),
            SearchError::NonZeroExit(Some(code)) => {
                write!(f, "Lister exited with status {code}")
            }
            SearchError::NonZeroExit(None) => write!(f, "Lister terminated by signal"),
            SearchError::Timeout => write!(f, "Lister timed out"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PathcompError {}
impl std::error::Error for SearchError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to PathcompError ========================= */

impl From<io::Error> for PathcompError {
    fn from(err: io::Error) -> Self {
        PathcompError::Io(err)
    }
}

impl From<SearchError> for PathcompError {
    fn from(err: SearchError) -> Self {
        PathcompError::Search(err)
    }
}

impl From<ConfigError> for PathcompError {
    fn from(err: ConfigError) -> Self {
        PathcompError::Config(err)
    }
}

impl From<String> for PathcompError {
    fn from(msg: String) -> Self {
        PathcompError::Generic(msg)
    }
}

impl From<&str> for PathcompError {
    fn from(msg: &str) -> Self {
        PathcompError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        let err = SearchError::InvalidBaseDirectory("/no/such/dir".to_string());
        assert_eq!(err.to_string(), "Invalid base directory: /no/such/dir");

        let err = SearchError::NonZeroExit(Some(1));
        assert_eq!(err.to_string(), "Lister exited with status 1");

        let err = SearchError::Timeout;
        assert_eq!(err.to_string(), "Lister timed out");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "timeout_millis".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'abc' for field 'timeout_millis'"
        );
    }

    #[test]
    fn test_conversion_wraps_kind() {
        let err: PathcompError = SearchError::Timeout.into();
        assert!(matches!(err, PathcompError::Search(SearchError::Timeout)));

        let err: PathcompError = ConfigError::Generic("bad".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
