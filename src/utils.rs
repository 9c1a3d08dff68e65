use std::io;
use thiserror::Error;

/// Custom error types for the excuse generator
#[derive(Error, Debug)]
pub enum ExcuseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Empty vocabulary: {0}")]
    EmptyVocabulary(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExcuseError {
    /// Build a parse error located on a given line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ExcuseError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Move a parse error to another line, leaving other errors untouched
    pub fn at_line(self, line: usize) -> Self {
        match self {
            ExcuseError::Parse { message, .. } => ExcuseError::Parse { line, message },
            other => other,
        }
    }
}

/// Result type for excuse operations
pub type Result<T> = std::result::Result<T, ExcuseError>;
