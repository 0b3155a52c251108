//! Polynomial evaluation over big integers.
//!
//! Builds sample sets with a known constant term; recovery does not call it.

use num_bigint::BigInt;
use num_traits::Zero;

use super::share::Point;

/// Evaluates a polynomial at `x` using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)
pub fn evaluate_polynomial(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
}

/// Samples the polynomial at each of `xs`.
pub fn sample_points(coeffs: &[BigInt], xs: &[BigInt]) -> Vec<Point> {
    xs.iter()
        .map(|x| Point::new(x.clone(), evaluate_polynomial(coeffs, x)))
        .collect()
}
