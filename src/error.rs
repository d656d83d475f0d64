use thiserror::Error;

/// Unified error type for the layout engine.
///
/// Structural errors (dimension mismatch, embedding source failure) abort a
/// whole pipeline run; numeric edge cases are absorbed locally by the
/// components and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("embedding dimension mismatch at item {index}: expected {expected}, got {got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        index: usize,
    },

    #[error("embedding source failed for item '{id}': {message}")]
    EmbeddingSource { id: String, message: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("numerical error: {message}")]
    Numerical { message: String },

    #[error("embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("embedding API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn embedding_source(id: impl Into<String>, message: impl Into<String>) -> Self {
        Error::EmbeddingSource {
            id: id.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub fn numerical(message: impl Into<String>) -> Self {
        Error::Numerical {
            message: message.into(),
        }
    }

    /// Whether a retry could plausibly change the outcome.
    ///
    /// Network failures and throttling/server-side API errors are transient;
    /// everything else is a property of the input or the configuration.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Request(_) | Error::EmbeddingSource { .. } => true,
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
