//! # Error Types
//!
//! This module defines error types used throughout the recibo library.
//!
//! Receipt building itself never fails: unsupported features degrade to plain
//! text or nothing. Errors only come from the edges (profile lookup, JSON
//! documents, file I/O).

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// No built-in profile matches the requested name
    #[error("Unknown profile '{0}'. Run `recibo profiles` to see available profiles")]
    UnknownProfile(String),

    /// A profile violates the width invariants
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A receipt document could not be turned into builder calls
    #[error("Document error: {0}")]
    Document(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
