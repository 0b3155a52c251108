//! Sample Point Definition.
//!
//! A point $(x, y)$ on the polynomial that hides the secret.
//! - $x$: the record index the sample was stored under.
//! - $y$: the decoded evaluation of the polynomial at $x$.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop`: both coordinates are reset to
//!   zero on drop. `BigInt` does not expose its limbs, so the released
//!   buffers themselves are not overwritten.
//! - `Debug` implementation redacts the y-coordinate.

use core::fmt;
use num_bigint::BigInt;
use num_traits::Zero;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A decoded sample of the secret polynomial.
#[derive(Clone, PartialEq, Eq)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl Zeroize for Point {
    fn zeroize(&mut self) {
        self.x = BigInt::zero();
        self.y = BigInt::zero();
    }
}

impl Drop for Point {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("bits", &self.y.bits())
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
