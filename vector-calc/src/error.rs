//! Error types for the calculator session
//!
//! Neither type reaches the vector math: [`InputError`] is shown to the user
//! before re-prompting, and [`SessionError`] ends the session.

use std::error::Error;
use std::fmt;
use std::io;
use std::num::ParseFloatError;

/// Why a typed token is not a vector component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A component could not be parsed as a number.
    InvalidNumber {
        token: String,
        source: ParseFloatError,
    },
    /// A component parsed to infinity or NaN.
    NonFinite { token: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { token, .. } => write!(f, "'{token}' is not a number"),
            Self::NonFinite { token } => write!(f, "'{token}' is not a finite number"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failure that ends a session before an operation could be performed.
#[derive(Debug)]
pub enum SessionError {
    /// Reading stdin or writing stdout failed.
    Io(io::Error),
    /// Input ran out while a vector or menu choice was still expected.
    UnexpectedEof,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "input ended before all values were entered"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnexpectedEof => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
