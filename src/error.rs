//! Error types for student-record
//!
//! Provides a unified error type for all operations.

use std::fmt;

use thiserror::Error;

/// Result type alias using RecordError
pub type Result<T> = std::result::Result<T, RecordError>;

/// The four record fields, in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    FirstName,
    LastName,
    Standard,
}

impl Field {
    /// Fields in the order they are read from input
    pub const INPUT_ORDER: [Field; 4] = [
        Field::Age,
        Field::FirstName,
        Field::LastName,
        Field::Standard,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Age => "age",
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Standard => "standard",
        };
        f.write_str(name)
    }
}

/// Unified error type for student-record operations
#[derive(Debug, Error)]
pub enum RecordError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid {field}: {reason}")]
    Parse { field: Field, reason: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
