//! Error types for the mapper host-integration layer
//!
//! The claim derivation itself (descriptor parsing, claim resolution, group
//! aggregation) is total and never fails; malformed input degrades to the
//! documented fallback values. Errors only arise while validating mapper
//! configuration or serializing the claims document for a token.

use thiserror::Error;

/// Mapper errors
#[derive(Debug, Error)]
pub enum MapperError {
    /// Invalid mapper configuration
    #[error("Invalid mapper configuration: {0}")]
    InvalidConfig(String),

    /// Claims document could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;
