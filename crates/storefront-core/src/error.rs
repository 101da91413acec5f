//! Error Types

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors from the product listing call
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("Request error: {0}")]
    Http(String),

    /// Endpoint answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}
