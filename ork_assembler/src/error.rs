//! Error handling for the assembler crate.
//!
//! The assembler is a best-effort formatting stage: malformed attributes
//! degrade to defaults instead of failing the cycle, so the error surface
//! is deliberately small.

use thiserror::Error;

/// Errors the assembler can report
#[derive(Debug, Error)]
pub enum AssemblerError {
    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for assembler operations
pub type AssemblerResult<T> = Result<T, AssemblerError>;
