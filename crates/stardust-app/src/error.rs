//! Application error types.

/// Errors that can occur while running the field or exporting frames.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or saved.
    #[error("configuration error: {0}")]
    Config(#[from] stardust_config::ConfigError),

    /// A snapshot file could not be created or written.
    #[error("failed to write snapshot: {0}")]
    SnapshotIo(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode snapshot: {0}")]
    SnapshotEncode(#[from] png::EncodingError),
}
