//! Numeric kinds the reduction engine can average.
//!
//! One trait replaces what the averaging overload family would otherwise
//! express as five copies of the same loop: each kind picks its accumulator
//! width, its quotient type, and its overflow discipline.
//!
//! The asymmetry here is deliberate and must stay: integer and decimal
//! accumulators use checked addition and fail with [`Error::Overflow`], while
//! floating-point accumulators follow IEEE semantics, so NaN and infinity
//! flow through as ordinary values.

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// A numeric element kind with a known accumulation strategy.
pub trait NumericKind: Copy {
    /// Running-sum type carried across one reduction.
    type Sum: Copy;

    /// Quotient type of `sum / count`.
    type Mean;

    /// The empty sum.
    fn zero() -> Self::Sum;

    /// Add one value to the running sum, honoring the kind's overflow policy.
    fn accumulate(sum: Self::Sum, value: Self) -> Result<Self::Sum>;

    /// Divide the final sum by the element count.
    ///
    /// Callers guarantee `count > 0`.
    fn mean(sum: Self::Sum, count: u64) -> Self::Mean;
}

impl NumericKind for i32 {
    // Widened to i64, matching how much headroom a 32-bit sum is given
    // before checked addition can actually trip.
    type Sum = i64;
    type Mean = f64;

    fn zero() -> i64 {
        0
    }

    fn accumulate(sum: i64, value: i32) -> Result<i64> {
        sum.checked_add(i64::from(value))
            .ok_or(Error::Overflow("int32"))
    }

    fn mean(sum: i64, count: u64) -> f64 {
        sum as f64 / count as f64
    }
}

impl NumericKind for i64 {
    type Sum = i64;
    type Mean = f64;

    fn zero() -> i64 {
        0
    }

    fn accumulate(sum: i64, value: i64) -> Result<i64> {
        sum.checked_add(value).ok_or(Error::Overflow("int64"))
    }

    fn mean(sum: i64, count: u64) -> f64 {
        sum as f64 / count as f64
    }
}

impl NumericKind for f32 {
    // Accumulate in f64, quotient narrows back to f32.
    type Sum = f64;
    type Mean = f32;

    fn zero() -> f64 {
        0.0
    }

    fn accumulate(sum: f64, value: f32) -> Result<f64> {
        Ok(sum + f64::from(value))
    }

    fn mean(sum: f64, count: u64) -> f32 {
        (sum / count as f64) as f32
    }
}

impl NumericKind for f64 {
    type Sum = f64;
    type Mean = f64;

    fn zero() -> f64 {
        0.0
    }

    fn accumulate(sum: f64, value: f64) -> Result<f64> {
        Ok(sum + value)
    }

    fn mean(sum: f64, count: u64) -> f64 {
        sum / count as f64
    }
}

impl NumericKind for Decimal {
    type Sum = Decimal;
    type Mean = Decimal;

    fn zero() -> Decimal {
        Decimal::ZERO
    }

    fn accumulate(sum: Decimal, value: Decimal) -> Result<Decimal> {
        sum.checked_add(value).ok_or(Error::Overflow("decimal"))
    }

    fn mean(sum: Decimal, count: u64) -> Decimal {
        sum / Decimal::from(count)
    }
}
