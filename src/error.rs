//! Crate-level error types.

use std::fmt;

/// Errors produced by the grava crate.
#[derive(Debug)]
pub enum GravaError {
    /// Malformed color string (expected `#rgb` or `#rrggbb`).
    InvalidColor(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for GravaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color string: {s:?}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GravaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GravaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
