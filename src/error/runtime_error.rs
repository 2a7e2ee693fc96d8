#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while operands are resolved and
/// operators are applied.
pub enum RuntimeError {
    /// A variable operand was longer than one character or has no value in
    /// the variable table.
    UnresolvedOperand {
        /// The text of the variable token.
        operand: String,
    },
    /// The right operand of `/` or `%` was zero.
    DivisionByZero {
        /// The operator that was applied.
        operator: String,
    },
    /// A number literal could not be read as a floating-point value.
    InvalidNumber {
        /// The literal text.
        text: String,
    },
    /// An operation or a variable produced an infinity or `NaN`.
    NonFiniteResult {
        /// The non-finite value.
        value: f64,
    },
    /// A modulo operand could not be truncated to a 64-bit integer.
    OperandOutOfRange {
        /// The value that was out of range.
        value: f64,
    },
}

impl RuntimeError {
    /// Builds the error for a variable operand that could not be resolved.
    #[must_use]
    pub fn unresolved(operand: &str) -> Self {
        Self::UnresolvedOperand { operand: operand.to_string() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedOperand { operand } if operand.chars().count() > 1 => write!(f,
                                                                                         "Unresolved operand '{operand}': variable names are a single character."),
            Self::UnresolvedOperand { operand } => {
                write!(f, "Unresolved operand '{operand}': variable has no value.")
            },
            Self::DivisionByZero { operator } => {
                write!(f, "Division by zero in '{operator}' operation.")
            },
            Self::InvalidNumber { text } => write!(f, "Invalid number literal '{text}'."),
            Self::NonFiniteResult { value } => {
                write!(f, "Result {value} is not a finite number.")
            },
            Self::OperandOutOfRange { value } => {
                write!(f, "Operand {value} cannot be truncated to an integer.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
