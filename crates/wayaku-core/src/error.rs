use thiserror::Error;

/// Top-level error type for Wayaku.
#[derive(Debug, Error)]
pub enum WayakuError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Document tree error (foreign node handle, illegal move).
    #[error("document error: {0}")]
    Document(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
