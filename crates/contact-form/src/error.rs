// File: src/error.rs
// Purpose: Faults raised by the library. Validation outcomes are not errors and live in validation/

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}` (expected firstName, lastName, email or message)")]
    UnknownField(String),

    #[error("line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, FormError>;
