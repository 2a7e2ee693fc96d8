//! # foldcalc
//!
//! foldcalc is an arithmetic expression interpreter written in Rust.
//! It tokenizes infix expressions over `+`, `-`, `*`, `/` and `%`, with
//! parentheses, a leading unary minus and single-letter variables, and
//! evaluates them by folding the token sequence until one value remains.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcError, interpreter::evaluator::core::Calculator};

/// Provides the error types for validation and evaluation.
///
/// This module defines every error that a calculation can end in. Failures
/// are tagged values, never magic numbers, and the error handed to callers
/// carries the expression that produced it.
///
/// # Responsibilities
/// - Defines error enums for malformed input and for evaluation failures.
/// - Wraps both in a single error that records the raw expression.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// This module ties together the lexer, the token type, the variable table
/// and the evaluator. It exposes the public API for evaluating expressions.
///
/// # Responsibilities
/// - Converts expression text into tokens.
/// - Validates and reduces token sequences to a value.
/// - Owns the variables that expressions may refer to.
pub mod interpreter;
/// General numeric helpers.
///
/// Checked conversions between `f64` and `i64` used by integer modulo, and
/// the tolerance for treating a divisor as zero.
pub mod util;

/// Evaluates one expression with the given variable bindings.
///
/// This is a shortcut for creating a [`Calculator`], binding each variable
/// and calling [`Calculator::calculate`].
///
/// # Errors
/// Returns an error if the expression is malformed, refers to an unbound
/// variable, or divides by zero.
///
/// # Examples
/// ```
/// use foldcalc::evaluate;
///
/// let value = evaluate("10-2-x", &[('x', 3.0)]).unwrap();
/// assert_eq!(value, 5.0);
///
/// // 'z' is not bound.
/// assert!(evaluate("1+z", &[]).is_err());
/// ```
pub fn evaluate(source: &str, bindings: &[(char, f64)]) -> Result<f64, CalcError> {
    let calculator = Calculator::with_variables(bindings.iter().copied().collect());
    calculator.calculate(source)
}
