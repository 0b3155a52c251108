//! Radix-encoded value decoding.
//!
//! Values are big-endian numerals over the alphabet `0-9a-z` (letters are
//! case-insensitive), so `value = Σ digit_i * base^(len-1-i)`.

use num_bigint::{BigInt, BigUint};
use super::RecoveryError;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_BASE: u32 = 36;

/// Decodes `encoded` as a numeral in `base`.
///
/// # Returns
/// * `Ok(BigInt)` - The non-negative value of the numeral.
/// * `Err(RecoveryError)` - `InvalidBase`, `EmptyValue` or the first `InvalidDigit`.
pub fn decode(encoded: &str, base: u32) -> Result<BigInt, RecoveryError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RecoveryError::InvalidBase(base));
    }
    if encoded.is_empty() {
        return Err(RecoveryError::EmptyValue);
    }

    let digits = encoded
        .chars()
        .map(|c| {
            c.to_digit(base)
                .map(|d| d as u8)
                .ok_or(RecoveryError::InvalidDigit { digit: c, base })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    BigUint::from_radix_be(&digits, base)
        .map(BigInt::from)
        .ok_or(RecoveryError::InvalidBase(base))
}
