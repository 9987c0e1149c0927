use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric interface the rasterizer is written against.
///
/// Implemented for native `f32` and for [`crate::fixed::Fix16`]. Coordinates
/// live in `Self`; edge-function values and triangle areas are products of
/// coordinate differences and live in the wider [`Scalar::Wide`], so they
/// never saturate for anything that fits on a screen.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
{
    /// Accumulator for products of two values.
    type Wide: Copy
        + Debug
        + PartialOrd
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Neg<Output = Self::Wide>
        + Send
        + Sync;

    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    const WIDE_ZERO: Self::Wide;
    /// Whether adding constant deltas to a [`Scalar::Wide`] gives bit-identical
    /// results to evaluating the product afresh.
    const EXACT_STEPPING: bool;

    fn from_f32(v: f32) -> Self;
    fn from_int(n: i32) -> Self;
    fn to_f32(self) -> f32;
    /// Drops the fractional part (rounds toward zero).
    fn to_int(self) -> i32;
    fn floor_int(self) -> i32;
    fn ceil_int(self) -> i32;

    fn wide_mul(a: Self, b: Self) -> Self::Wide;
    /// `num / den` as a plain ratio. `den` must be non-zero.
    fn wide_ratio(num: Self::Wide, den: Self::Wide) -> f32;

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl Scalar for f32 {
    type Wide = f32;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const WIDE_ZERO: Self::Wide = 0.0;
    const EXACT_STEPPING: bool = false;

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        v
    }
    #[inline(always)]
    fn from_int(n: i32) -> Self {
        n as f32
    }
    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }
    #[inline(always)]
    fn to_int(self) -> i32 {
        self as i32
    }
    #[inline(always)]
    fn floor_int(self) -> i32 {
        self.floor() as i32
    }
    #[inline(always)]
    fn ceil_int(self) -> i32 {
        self.ceil() as i32
    }
    #[inline(always)]
    fn wide_mul(a: Self, b: Self) -> Self::Wide {
        a * b
    }
    #[inline(always)]
    fn wide_ratio(num: Self::Wide, den: Self::Wide) -> f32 {
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_truncates_toward_zero() {
        assert_eq!(Scalar::to_int(2.9f32), 2);
        assert_eq!(Scalar::to_int(-2.9f32), -2);
        assert_eq!((-2.1f32).floor_int(), -3);
        assert_eq!((-2.1f32).ceil_int(), -2);
    }

    #[test]
    fn min_max_pick_by_order() {
        assert_eq!(Scalar::min(3.0f32, -1.0), -1.0);
        assert_eq!(Scalar::max(3.0f32, -1.0), 3.0);
    }

    #[test]
    fn float_wide_ops() {
        assert_eq!(<f32 as Scalar>::wide_mul(1.5, -4.0), -6.0);
        assert_eq!(<f32 as Scalar>::wide_ratio(3.0, 12.0), 0.25);
    }
}
