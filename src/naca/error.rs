//! Error types for designation parsing and profile generation.

use thiserror::Error;

/// Result type for airfoil operations.
pub type FoilResult<T> = Result<T, FoilError>;

/// Errors that can occur while parsing a designation or generating a profile.
#[derive(Debug, Error)]
pub enum FoilError {
    /// The string does not start with the literal `NACA` token.
    ///
    /// This is a benign negative: the input is simply not a NACA
    /// description, and the caller decides whether to retry or give up.
    #[error("not a NACA description: {name}")]
    NotNaca {
        /// The rejected input string.
        name: String,
    },

    /// The designation ends before a required character offset.
    #[error("designation '{name}' is truncated: needs at least {needed} characters")]
    Truncated {
        /// The designation string.
        name: String,
        /// Minimum length required to read the missing group.
        needed: usize,
    },

    /// A character that should be a decimal digit is not one.
    #[error("designation '{name}' has a malformed digit at offset {offset}: found '{found}'")]
    MalformedDigit {
        /// The designation string.
        name: String,
        /// Zero-based character offset of the offending character.
        offset: usize,
        /// The character found instead of a digit.
        found: char,
    },

    /// The requested station count is below the supported minimum.
    #[error("too few stations: requested {requested}, minimum is {minimum}")]
    TooFewStations {
        /// The station count that was requested.
        requested: usize,
        /// The smallest supported station count.
        minimum: usize,
    },
}

impl FoilError {
    /// Creates a "not a NACA description" error.
    pub fn not_naca(name: impl Into<String>) -> Self {
        Self::NotNaca { name: name.into() }
    }

    /// Creates a truncated-designation error.
    pub fn truncated(name: impl Into<String>, needed: usize) -> Self {
        Self::Truncated {
            name: name.into(),
            needed,
        }
    }

    /// Creates a malformed-digit error.
    pub fn malformed_digit(name: impl Into<String>, offset: usize, found: char) -> Self {
        Self::MalformedDigit {
            name: name.into(),
            offset,
            found,
        }
    }
}
