//! Secret recovery from polynomial samples.
//!
//! A secret is the constant term of a polynomial of degree k-1. Every sample
//! is a point $(x, y)$ whose y-coordinate arrives encoded in some radix.
//!
//! # Components
//! - `share`: Definition of a decoded sample point.
//! - `radix`: Decoding of radix-encoded values (bases 2..=36).
//! - `polynomial`: Horner evaluation, used to produce sample points.
//! - `reconstruct`: Exact Lagrange interpolation for secret recovery.
//!
//! # Arithmetic
//! - All values are arbitrary-precision integers (`num-bigint`).
//! - Interpolation runs over exact rationals and only yields a secret when
//!   the constant term is an integer.

pub mod share;
pub mod radix;
pub mod polynomial;
pub mod reconstruct;

use core::fmt;
use num_bigint::BigInt;

pub use reconstruct::{interpolate_at, reconstruct_at, reconstruct_secret};
pub use share::Point;

/// Errors raised while loading samples or recovering a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    /// Reading an input failed.
    Io(std::io::ErrorKind),
    /// The document is not shaped like a sample set.
    MalformedInput(String),
    /// A required field is absent or not a non-negative integer.
    MissingField(&'static str),
    /// Threshold of zero was requested.
    InvalidThreshold(usize),
    /// Fewer decoded points than the threshold.
    InsufficientPoints { needed: usize, found: usize },
    /// Character is not a digit of the declared base.
    InvalidDigit { digit: char, base: u32 },
    /// Base outside 2..=36.
    InvalidBase(u32),
    /// Encoded value has no digits.
    EmptyValue,
    /// Two selected points share an x-coordinate.
    DuplicateAbscissa(BigInt),
    /// The interpolated value is a proper fraction.
    NonIntegerResult { numer: BigInt, denom: BigInt },
}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryError::Io(kind) => write!(f, "I/O error: {}", kind),
            RecoveryError::MalformedInput(reason) => write!(f, "Malformed input: {}", reason),
            RecoveryError::MissingField(field) => write!(f, "Cannot find {} value in input", field),
            RecoveryError::InvalidThreshold(k) => write!(f, "Invalid threshold k={}", k),
            RecoveryError::InsufficientPoints { needed, found } => write!(
                f,
                "Not enough points provided for interpolation: need {}, found {}",
                needed, found
            ),
            RecoveryError::InvalidDigit { digit, base } => {
                write!(f, "Invalid digit '{}' for base {}", digit, base)
            }
            RecoveryError::InvalidBase(base) => write!(f, "Unsupported base {} (expected 2..=36)", base),
            RecoveryError::EmptyValue => write!(f, "Encoded value is empty"),
            RecoveryError::DuplicateAbscissa(x) => write!(f, "Duplicate x-coordinate {}", x),
            RecoveryError::NonIntegerResult { numer, denom } => {
                write!(f, "Interpolated value {}/{} is not an integer", numer, denom)
            }
        }
    }
}

impl std::error::Error for RecoveryError {}

impl From<std::io::Error> for RecoveryError {
    fn from(err: std::io::Error) -> Self {
        RecoveryError::Io(err.kind())
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(err: serde_json::Error) -> Self {
        RecoveryError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RecoveryError::InvalidDigit { digit: '2', base: 2 }.to_string(),
            "Invalid digit '2' for base 2"
        );
        assert_eq!(
            RecoveryError::InsufficientPoints { needed: 3, found: 2 }.to_string(),
            "Not enough points provided for interpolation: need 3, found 2"
        );
        assert_eq!(
            RecoveryError::MissingField("k").to_string(),
            "Cannot find k value in input"
        );
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            RecoveryError::from(err),
            RecoveryError::Io(std::io::ErrorKind::NotFound)
        );
    }
}
