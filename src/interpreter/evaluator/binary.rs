use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Calculator, EvalResult},
        lexer::TokenKind,
    },
    util::num::{f64_to_i64_truncated, is_approx_zero},
};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// Returns the operator a token kind denotes, if any.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Percent => Some(Self::Mod),
            _ => None,
        }
    }

    /// Returns `true` for the operators folded by the multiplicative pass.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Calculator {
    /// Applies a binary operator to two resolved operands.
    ///
    /// `+`, `-`, `*` and `/` use floating-point arithmetic. `%` truncates
    /// both operands towards zero and takes the integer remainder, whose sign
    /// follows the dividend.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value, `DivisionByZero` when the right operand of `/`
    /// or `%` is zero, or `NonFiniteResult` when the result overflows to an
    /// infinity or is `NaN`.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::evaluator::{binary::BinaryOperator, core::Calculator};
    ///
    /// assert_eq!(Calculator::eval_binary(BinaryOperator::Mul, 1.5, 2.0).unwrap(), 3.0);
    /// assert_eq!(Calculator::eval_binary(BinaryOperator::Mod, 7.9, 3.2).unwrap(), 1.0);
    /// assert!(Calculator::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// assert!(Calculator::eval_binary(BinaryOperator::Mul, 1e300, 1e10).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        let value = Self::apply(op, left, right)?;
        if !value.is_finite() {
            return Err(RuntimeError::NonFiniteResult { value }.into());
        }
        Ok(value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn apply(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if is_approx_zero(right) {
                    return Err(RuntimeError::DivisionByZero { operator: op.to_string() }.into());
                }
                Ok(left / right)
            },
            Mod => {
                let divisor = f64_to_i64_truncated(right)?;
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero { operator: op.to_string() }.into());
                }
                let dividend = f64_to_i64_truncated(left)?;
                // i64::MIN % -1 overflows, the remainder itself is zero
                let remainder = dividend.checked_rem(divisor).unwrap_or(0);

                // Both operands were f64 integers, so the remainder is exact
                Ok(remainder as f64)
            },
        }
    }
}
