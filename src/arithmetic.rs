/// Arithmetic primitives.
///
/// All pipeline values are i64. No float.
/// The pipelines go through the checked variants; overflow is an error,
/// never a silent wrap.

use std::ops::Add;

use crate::error::{PipelineError, Result};

/// Curried two-argument adder: `curried_add(x)(y) == x + y`.
pub fn curried_add<T>(x: T) -> impl Fn(T) -> T
where
    T: Add<Output = T> + Copy,
{
    move |y| x + y
}

/// `x + 1`.
///
/// # Panics
///
/// On `i64::MAX` in debug builds (wraps in release). Use [`checked_increment`]
/// when the input is not known to be below the maximum.
pub fn increment(x: i64) -> i64 {
    x + 1
}

/// `x + 1`, checked.
pub fn checked_increment(x: i64) -> Result<i64> {
    checked_add(x, 1)
}

/// Checked integer addition.
pub fn checked_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(PipelineError::Overflow {
        op: "+",
        lhs: a,
        rhs: b,
    })
}

/// Checked integer multiplication.
pub fn checked_mul(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or(PipelineError::Overflow {
        op: "*",
        lhs: a,
        rhs: b,
    })
}

/// `x * x`, checked.
pub fn square(x: i64) -> Result<i64> {
    checked_mul(x, x)
}
