//! Error types for passcore

use thiserror::Error;

/// Errors returned by password generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Requested length is outside the allowed bounds
    #[error("Password length must be between {min} and {max}, got {length}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    /// Every character class flag was false
    #[error("At least one character class must be selected")]
    NoCharacterClassSelected,
}

/// Errors returned by the localization layer
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// Language code has no embedded table
    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),

    /// Embedded table could not be parsed
    #[error("Failed to parse language '{lang}': {source}")]
    Parse {
        lang: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
