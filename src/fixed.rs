//! 16.16 fixed-point numbers.
//!
//! Values are stored as `raw = value * 2^16` in an `i32`, giving a range of
//! roughly ±32768 with a precision of ~0.000015. Arithmetic is plain integer
//! math, so results are bit-identical on every platform.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar::Scalar;

pub const FRAC_BITS: u32 = 16;
const ONE_RAW: i32 = 1 << FRAC_BITS;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fix16(pub i32);

#[inline(always)]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[inline(always)]
fn saturate_wide(v: i128) -> i32 {
    v.clamp(i32::MIN as i128, i32::MAX as i128) as i32
}

impl Fix16 {
    pub const ZERO: Fix16 = Fix16(0);
    pub const ONE: Fix16 = Fix16(ONE_RAW);
    pub const MAX: Fix16 = Fix16(i32::MAX);
    pub const MIN: Fix16 = Fix16(i32::MIN);

    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Self {
        Fix16(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn from_f32(v: f32) -> Self {
        // f64 keeps the scaled value exact for every f32 in range.
        Fix16((v as f64 * ONE_RAW as f64).round() as i32)
    }

    pub const fn from_int(n: i32) -> Self {
        Fix16(n << FRAC_BITS)
    }

    pub fn to_f32(self) -> f32 {
        (self.0 as f64 / ONE_RAW as f64) as f32
    }

    pub const fn to_int(self) -> i32 {
        self.0 / ONE_RAW
    }
}

impl Add for Fix16 {
    type Output = Fix16;
    #[inline(always)]
    fn add(self, other: Fix16) -> Fix16 {
        Fix16(self.0.saturating_add(other.0))
    }
}

impl Sub for Fix16 {
    type Output = Fix16;
    #[inline(always)]
    fn sub(self, other: Fix16) -> Fix16 {
        Fix16(self.0.saturating_sub(other.0))
    }
}

impl Mul for Fix16 {
    type Output = Fix16;
    #[inline(always)]
    fn mul(self, other: Fix16) -> Fix16 {
        Fix16(saturate((self.0 as i64 * other.0 as i64) >> FRAC_BITS))
    }
}

impl Div for Fix16 {
    type Output = Fix16;
    /// Panics on a zero divisor, like integer division.
    #[inline(always)]
    fn div(self, other: Fix16) -> Fix16 {
        Fix16(saturate(((self.0 as i64) << FRAC_BITS) / other.0 as i64))
    }
}

impl Neg for Fix16 {
    type Output = Fix16;
    #[inline(always)]
    fn neg(self) -> Fix16 {
        Fix16(self.0.saturating_neg())
    }
}

impl fmt::Display for Fix16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

/// Products are kept as raw `i64` in 32.32 format: exact for any two 16.16
/// inputs, so edge values can be stepped without drift.
impl Scalar for Fix16 {
    type Wide = i64;

    const ZERO: Self = Fix16(0);
    const ONE: Self = Fix16(ONE_RAW);
    const HALF: Self = Fix16(ONE_RAW / 2);
    const WIDE_ZERO: i64 = 0;
    const EXACT_STEPPING: bool = true;

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        Fix16::from_f32(v)
    }
    #[inline(always)]
    fn from_int(n: i32) -> Self {
        Fix16::from_int(n)
    }
    #[inline(always)]
    fn to_f32(self) -> f32 {
        Fix16::to_f32(self)
    }
    #[inline(always)]
    fn to_int(self) -> i32 {
        Fix16::to_int(self)
    }
    #[inline(always)]
    fn floor_int(self) -> i32 {
        // Arithmetic shift rounds toward negative infinity.
        self.0 >> FRAC_BITS
    }
    #[inline(always)]
    fn ceil_int(self) -> i32 {
        ((self.0 as i64 + (ONE_RAW as i64 - 1)) >> FRAC_BITS) as i32
    }
    #[inline(always)]
    fn wide_mul(a: Self, b: Self) -> i64 {
        a.0 as i64 * b.0 as i64
    }
    /// Same `(a << 16) / b` division as `Div`, in 128 bits since `num` is 32.32.
    #[inline(always)]
    fn wide_ratio(num: i64, den: i64) -> f32 {
        Fix16(saturate_wide(((num as i128) << FRAC_BITS) / den as i128)).to_f32()
    }
}
