//! Secret reconstruction from sample points.
//!
//! Lagrange interpolation over exact rationals:
//! f(at) = Σ_i y_i * Π_{j≠i} (at - x_j) / (x_i - x_j)
//!
//! Each basis term keeps its numerator and denominator apart and the sum is
//! reduced, so a result that is not an integer is reported rather than
//! truncated.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::{share::Point, RecoveryError};

/// Evaluates the interpolating polynomial through `points` at `at`.
///
/// # Returns
/// * `Ok(BigInt)` - f(at), when it is an integer.
/// * `Err(RecoveryError)` - On an empty input, repeated x-coordinates, or a fractional result.
pub fn interpolate_at(points: &[Point], at: &BigInt) -> Result<BigInt, RecoveryError> {
    if points.is_empty() {
        return Err(RecoveryError::InsufficientPoints { needed: 1, found: 0 });
    }

    // O(k^2) check; a repeated x would zero a denominator below.
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].x() == points[j].x() {
                return Err(RecoveryError::DuplicateAbscissa(points[i].x().clone()));
            }
        }
    }

    let mut sum = BigRational::zero();
    for (i, point) in points.iter().enumerate() {
        let mut numerator = point.y().clone();
        let mut denominator = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= at - other.x();
            denominator *= point.x() - other.x();
        }

        sum += BigRational::new(numerator, denominator);
    }

    if !sum.is_integer() {
        return Err(RecoveryError::NonIntegerResult {
            numer: sum.numer().clone(),
            denom: sum.denom().clone(),
        });
    }
    Ok(sum.to_integer())
}

/// Interpolates the first `k` of `points` at `at`.
pub fn reconstruct_at(points: &[Point], k: usize, at: &BigInt) -> Result<BigInt, RecoveryError> {
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold(k));
    }
    if points.len() < k {
        return Err(RecoveryError::InsufficientPoints {
            needed: k,
            found: points.len(),
        });
    }
    interpolate_at(&points[..k], at)
}

/// Recovers the constant term of the degree-(k-1) polynomial from the first `k` points.
pub fn reconstruct_secret(points: &[Point], k: usize) -> Result<BigInt, RecoveryError> {
    reconstruct_at(points, k, &BigInt::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpc::polynomial::{evaluate_polynomial, sample_points};

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn test_reconstruct_basic() {
        // f(x) = x^2 + 3
        let points = vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
        assert_eq!(reconstruct_secret(&points, 3).unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_reconstruct_large_coefficients() {
        let coeffs: Vec<BigInt> = [
            "79836264049851",
            "123456789012345678901234567890",
            "98765432109876543210",
            "5",
            "1000000000000000000000000000000000007",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
        let points = sample_points(&coeffs, &ints(&[1, 2, 3, 4, 5, 6, 7]));

        assert_eq!(reconstruct_secret(&points, 5).unwrap(), coeffs[0]);
        // Any k-subset recovers the same secret.
        let subset = vec![
            points[6].clone(),
            points[1].clone(),
            points[4].clone(),
            points[2].clone(),
            points[5].clone(),
        ];
        assert_eq!(reconstruct_secret(&subset, 5).unwrap(), coeffs[0]);
    }

    #[test]
    fn test_order_invariance() {
        let coeffs = ints(&[-17, 4, 0, 9]);
        let mut points = sample_points(&coeffs, &ints(&[2, 5, 11, 13]));
        let forward = interpolate_at(&points, &BigInt::zero()).unwrap();
        points.reverse();
        let backward = interpolate_at(&points, &BigInt::zero()).unwrap();
        points.swap(0, 2);
        let shuffled = interpolate_at(&points, &BigInt::zero()).unwrap();

        assert_eq!(forward, BigInt::from(-17));
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_interpolate_at_other_points() {
        let coeffs = ints(&[3, 0, 1]);
        let points = sample_points(&coeffs, &ints(&[1, 2, 3]));
        for at in [-4i64, 0, 10, 250] {
            let at = BigInt::from(at);
            assert_eq!(
                interpolate_at(&points, &at).unwrap(),
                evaluate_polynomial(&coeffs, &at)
            );
        }
    }

    #[test]
    fn test_negative_abscissae() {
        let coeffs = ints(&[42, -3, 2]);
        let points = sample_points(&coeffs, &ints(&[-7, -1, 4]));
        assert_eq!(reconstruct_secret(&points, 3).unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_uses_first_k_points_only() {
        let mut points = sample_points(&ints(&[3, 0, 1]), &ints(&[1, 2, 3]));
        // A corrupted fourth point must not influence the result.
        points.push(Point::new(6, 1_000_000));
        assert_eq!(reconstruct_secret(&points, 3).unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_reconstruct_errors() {
        let points = vec![Point::new(1, 4), Point::new(2, 7)];
        assert_eq!(
            reconstruct_secret(&points, 3),
            Err(RecoveryError::InsufficientPoints { needed: 3, found: 2 })
        );
        assert_eq!(
            reconstruct_secret(&points, 0),
            Err(RecoveryError::InvalidThreshold(0))
        );
        assert_eq!(
            interpolate_at(&[], &BigInt::zero()),
            Err(RecoveryError::InsufficientPoints { needed: 1, found: 0 })
        );

        let duplicate = vec![Point::new(1, 4), Point::new(2, 7), Point::new(1, 9)];
        assert_eq!(
            reconstruct_secret(&duplicate, 3),
            Err(RecoveryError::DuplicateAbscissa(BigInt::from(1)))
        );
    }

    #[test]
    fn test_fractional_result_is_reported() {
        // Line through (1, 1) and (3, 2) crosses x=0 at 1/2.
        let points = vec![Point::new(1, 1), Point::new(3, 2)];
        assert_eq!(
            reconstruct_secret(&points, 2),
            Err(RecoveryError::NonIntegerResult {
                numer: BigInt::from(1),
                denom: BigInt::from(2),
            })
        );
    }
}
