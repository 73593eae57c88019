// core/src/error/input_error.rs
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Malformed input: the only way an exercise run can fail.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: missing input for {field}")]
    MissingLine { line: usize, field: &'static str },

    #[error("line {line}: {field} must be an integer, got {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: {field} must be a number, got {value:?}")]
    InvalidFloat {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}
