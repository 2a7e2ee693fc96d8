/// Numeric conversion helpers.
///
/// Provides the checked conversions between `f64` and `i64` that integer
/// modulo relies on, and the tolerance used to decide whether a divisor is
/// zero. Conversions return a `Result` instead of silently saturating.
pub mod num;
