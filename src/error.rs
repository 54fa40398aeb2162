use thiserror::Error;

/// Crate-level errors.
///
/// The engine operations themselves are total: every lookup has a static
/// fallback, every string operation tolerates degenerate input, and every
/// aggregate tolerates an empty record collection. Only the configuration
/// and storage boundaries can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] crate::storage::StoreError),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
