use thiserror::Error;

/// Errors that can occur while loading a catalog or generating a recipe
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Catalog is empty or one of its entries is malformed
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    /// Request failed a precondition owned by the caller
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Settings or catalog file could not be read or deserialized
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize a recipe for output
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
