//! Error types for sentlex

use std::path::PathBuf;

/// Result type alias using sentlex's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sentlex operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lexicon could not be loaded
    #[error("lexicon load error: {0}")]
    Load(#[from] LoadError),

    /// Tokenizer construction errors
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new tokenizer error
    pub fn tokenizer(msg: impl Into<String>) -> Self {
        Self::Tokenizer(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the load error if this is a lexicon load failure
    pub fn as_load(&self) -> Option<&LoadError> {
        match self {
            Self::Load(e) => Some(e),
            _ => None,
        }
    }
}

/// Reasons a lexicon source can be rejected.
///
/// All of these are fatal: scoring never starts without a loaded lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file is missing or unreadable
    #[error("cannot open lexicon source {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("lexicon source has no '{column}' column")]
    MissingColumn { column: String },

    /// A weight cell does not parse as a number
    #[error("invalid weight '{value}' for '{phrase}' on line {line}")]
    InvalidWeight {
        line: u64,
        phrase: String,
        value: String,
    },

    /// The source is not well-formed CSV
    #[error("malformed lexicon source: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_wraps_into_error() {
        let err: Error = LoadError::missing_column("sw").into();
        assert!(matches!(
            err.as_load(),
            Some(LoadError::MissingColumn { column }) if column == "sw"
        ));
        assert_eq!(
            err.to_string(),
            "lexicon load error: lexicon source has no 'sw' column"
        );
    }

    #[test]
    fn test_non_load_error() {
        let err = Error::config("bad threads value");
        assert!(err.as_load().is_none());
        assert_eq!(err.to_string(), "configuration error: bad threads value");
    }
}
