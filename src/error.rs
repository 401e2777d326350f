use std::fmt;

/// Errors raised while parsing driver input. The engine itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Cell text is not of the form `x,y`
    InvalidCell(String),
    /// A coordinate is not a signed integer
    InvalidCoordinate(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCell(s) => write!(f, "Invalid cell (expected x,y): {}", s),
            ParseError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
