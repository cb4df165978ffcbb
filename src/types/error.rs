//! Error types for the catalogue engine.

use thiserror::Error;

/// Errors raised while building or configuring the catalogue engine.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Phrase {phrase:?} could not be compiled: {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Configuration document could not be parsed: {0}")]
    ConfigFormat(String),

    #[error("Recipe records could not be parsed: {0}")]
    Records(String),

    #[error("State could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failure to turn a share token back into UI state.
///
/// Every variant is the same outcome for callers: discard the token and
/// derive fresh state. The variants only exist to make logs useful.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("fragment does not start with the share prefix")]
    MissingPrefix,

    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),

    #[error("escaped payload is not valid UTF-8")]
    Utf8,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid state document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
