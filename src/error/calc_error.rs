use crate::error::{ParseError, RuntimeError};

/// The reason an evaluation failed.
///
/// Internal evaluation routines return this so that both kinds of error
/// propagate with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorCause {
    /// The expression is malformed.
    Parse(ParseError),
    /// The expression is well formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for ErrorCause {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for ErrorCause {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

/// A failed `calculate` call.
///
/// Carries the raw expression for diagnostics and the tagged cause. A failed
/// call never yields a number.
///
/// # Example
/// ```
/// use foldcalc::interpreter::evaluator::core::Calculator;
///
/// let calculator = Calculator::new();
/// let err = calculator.calculate("2/").unwrap_err();
///
/// assert!(err.is_malformed());
/// assert_eq!(err.expression(), "2/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalcError {
    expression: String,
    cause:      ErrorCause,
}

impl CalcError {
    /// Attaches the raw expression to a failure cause.
    #[must_use]
    pub fn new(expression: &str, cause: ErrorCause) -> Self {
        Self { expression: expression.to_string(),
               cause }
    }

    /// The expression whose evaluation failed.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub const fn cause(&self) -> &ErrorCause {
        &self.cause
    }

    /// True when the expression is structurally malformed.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self.cause, ErrorCause::Parse(_))
    }

    /// True when a variable could not be resolved.
    #[must_use]
    pub const fn is_unresolved_operand(&self) -> bool {
        matches!(self.cause, ErrorCause::Runtime(RuntimeError::UnresolvedOperand { .. }))
    }

    /// True when `/` or `%` had a zero right operand.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self.cause, ErrorCause::Runtime(RuntimeError::DivisionByZero { .. }))
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in '{}': {}", self.expression, self.cause)
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            ErrorCause::Parse(e) => Some(e),
            ErrorCause::Runtime(e) => Some(e),
        }
    }
}
