//! Error types for BedrockBuddy
//!
//! One crate-wide error enum; every remote-call failure propagates to the
//! pipeline caller unmodified, never downgraded to an empty result.

use thiserror::Error;

/// Main error type for the RAG toolkit
#[derive(Error, Debug)]
pub enum RagError {
    /// Embedding endpoint failure or a response missing the embedding field
    #[error("Embedding service error: {0}")]
    EmbeddingService(String),

    /// Generation endpoint failure or a response missing the output text
    #[error("Generation service error: {0}")]
    GenerationService(String),

    /// Vectors of unequal length were compared; fatal to the run
    #[error("Embedding dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Remote call exceeded its deadline
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for toolkit operations
pub type Result<T> = std::result::Result<T, RagError>;
