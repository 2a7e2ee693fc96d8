use crate::error::RuntimeError;

/// Divisors whose magnitude is below this value count as zero.
pub const ZERO_TOLERANCE: f64 = f64::EPSILON;

/// Returns `true` if `value` is zero within [`ZERO_TOLERANCE`].
///
/// ## Example
/// ```
/// use foldcalc::util::num::is_approx_zero;
///
/// assert!(is_approx_zero(0.0));
/// assert!(is_approx_zero(-1e-20));
/// assert!(!is_approx_zero(0.001));
/// ```
#[must_use]
pub fn is_approx_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Truncates an `f64` towards zero and converts it to `i64`.
///
/// Fractional digits are dropped, so `7.9` becomes `7` and `-2.5` becomes
/// `-2`.
///
/// ## Errors
/// Returns `RuntimeError::OperandOutOfRange` for non-finite values and for
/// values outside the `i64` range.
///
/// ## Example
/// ```
/// use foldcalc::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(7.9).unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-2.5).unwrap(), -2);
///
/// let err = f64_to_i64_truncated(f64::INFINITY).unwrap_err();
/// assert!(matches!(err, RuntimeError::OperandOutOfRange { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64) -> Result<i64, RuntimeError> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::OperandOutOfRange { value });
    }
    Ok(truncated as i64)
}
