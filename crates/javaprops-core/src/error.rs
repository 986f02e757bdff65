use thiserror::Error;

use crate::escape::MalformedEscape;

#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed \\uxxxx encoding on line {line}: {reason}")]
    MalformedEscape { line: u32, reason: MalformedEscape },
}

pub type PropertiesResult<T> = Result<T, PropertiesError>;
