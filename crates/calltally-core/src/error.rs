//! Error types for calltally-core.
//!
//! Date extraction is the only fallible operation in the library, so the
//! error type mirrors its failure modes: pattern mismatch, bad numeric
//! component, impossible calendar value.

use thiserror::Error;

/// Failure modes of the call-date extractor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The date text does not match the expected
    /// `YYYY-MM-DD H:MM:SS a.m./p.m.` pattern.
    #[error("malformed date text: {0}")]
    Malformed(String),

    /// A matched component failed integer conversion.
    #[error("non-numeric date component: {0}")]
    BadNumber(String),

    /// The integer components do not form a valid calendar date/time.
    #[error("date components out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for calltally operations.
pub type Result<T> = std::result::Result<T, ParseError>;
