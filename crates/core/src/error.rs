use thiserror::Error;

/// Errors raised while decoding client input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Bad date format (MM/DD/YYYY expected)")]
    InvalidBirthDate(String),

    #[error("Missing required patient fields")]
    MissingField(&'static str),
}
