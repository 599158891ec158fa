//! Error types for compile operations

use std::fmt;

/// Default message for malformed article data.
pub const DEFAULT_ARTICLE_DATA_MESSAGE: &str = "Article Data format was invalid.";

/// Errors that can occur while compiling an article
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Article data is missing, malformed, or does not match the expected shape
    ArticleData(String),
    /// The DOM could not be written out as HTML
    Serialization(String),
}

impl CompileError {
    /// Article data error carrying the default message.
    pub fn article_data() -> Self {
        CompileError::ArticleData(DEFAULT_ARTICLE_DATA_MESSAGE.to_string())
    }

    /// Raised by the compiler when `process` runs before an article is loaded.
    pub fn article_not_loaded() -> Self {
        CompileError::ArticleData("Article data has not been loaded.".to_string())
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::ArticleData(msg) => write!(f, "Article data error: {msg}"),
            CompileError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::ArticleData(format!("{DEFAULT_ARTICLE_DATA_MESSAGE} {err}"))
    }
}
