//! Error types for the RediCrypt client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RediCryptError
pub type Result<T> = std::result::Result<T, RediCryptError>;

/// Unified error type for RediCrypt client operations
#[derive(Debug, Error)]
pub enum RediCryptError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("unsupported hash type: {0}")]
    UnsupportedHash(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}
