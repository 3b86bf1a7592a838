//! Q4.29 fixed-point arithmetic.
//!
//! The escape-time loop runs entirely on scaled integers: a value `x` is
//! stored as `round(x * 2^29)` in an `i64`. Four integer bits cover the
//! whole escape region (|z| <= 2, |z|^2 <= 4 plus the post-update slop),
//! and 29 fractional bits set the zoom ceiling — past roughly 2^29 steps
//! per unit the representation can no longer tell adjacent pixels apart.
//! There is deliberately no overflow detection; inputs far outside the
//! format wrap or truncate, same as the scaled-`long` arithmetic this
//! format comes from.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Number of fractional bits in the representation.
pub const FRAC_BITS: u32 = 29;

const SCALE: f64 = (1i64 << FRAC_BITS) as f64;

/// A signed Q4.29 fixed-point number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(i64);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);

    /// Scale and truncate. Out-of-range inputs saturate at the `i64`
    /// boundary (the `as` cast), which is far outside Q4.29 anyway —
    /// callers are expected to stay within the supported zoom range.
    pub fn from_f64(x: f64) -> Fixed {
        Fixed((x * SCALE) as i64)
    }

    /// Exact conversion back to `f64`. Every raw value is below 2^53 in
    /// magnitude for in-range inputs, so no precision is lost.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE
    }

    /// Round to the nearest integer by biasing before the shift.
    /// Diagnostics only; the render path never leaves the scaled domain.
    pub fn round_to_i64(self) -> i64 {
        (self.0 + (1 << (FRAC_BITS - 1))) >> FRAC_BITS
    }

    pub const fn from_bits(raw: i64) -> Fixed {
        Fixed(raw)
    }

    pub const fn to_bits(self) -> i64 {
        self.0
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    /// Widening multiply: the raw product of two in-range operands needs
    /// up to 66 bits before the renormalizing shift, so it must be taken
    /// in `i128`. A same-width multiply silently corrupts any product
    /// past the native width.
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((self.0 as i128 * rhs.0 as i128) >> FRAC_BITS) as i64)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Numeric backend for the iteration engine.
///
/// The same escape-time routine runs over `f64` or over [`Fixed`]; the
/// backend is picked once at configuration time. Conversions happen only
/// at the frame boundary — inside a scan everything stays in the backend's
/// native domain.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Real for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Real for Fixed {
    fn from_f64(x: f64) -> Self {
        Fixed::from_f64(x)
    }

    fn to_f64(self) -> f64 {
        Fixed::to_f64(self)
    }
}
