#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way an expression can be structurally malformed.
///
/// Positions are indices into the token sequence produced by the tokenizer.
pub enum ParseError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// The numbers of `(` and `)` tokens differ.
    UnbalancedParentheses {
        /// Number of `(` tokens.
        open:  usize,
        /// Number of `)` tokens.
        close: usize,
    },
    /// A parenthesis had no partner while groups were being resolved.
    UnmatchedParenthesis {
        /// The unmatched parenthesis.
        token: String,
    },
    /// A `()` group enclosed nothing.
    EmptyGroup {
        /// Index of the `(` token.
        position: usize,
    },
    /// An operator was not followed by an operand, as in `2/` or `2+)`.
    MissingOperand {
        /// The operator without a right-hand side.
        operator: String,
        /// Index of the operator token.
        position: usize,
    },
    /// An operator or parenthesis was used where a value was required.
    ExpectedOperand {
        /// The offending token.
        token: String,
    },
    /// A token appeared where it cannot stand, such as two adjacent
    /// operators or two adjacent operands.
    UnexpectedToken {
        /// The offending token.
        token:    String,
        /// Index of the offending token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Malformed expression: nothing to evaluate."),
            Self::UnbalancedParentheses { open, close } => write!(f,
                                                                  "Malformed expression: {open} opening and {close} closing parentheses."),
            Self::UnmatchedParenthesis { token } => {
                write!(f, "Malformed expression: unmatched parenthesis '{token}'.")
            },
            Self::EmptyGroup { position } => {
                write!(f, "Malformed expression at token {position}: empty parentheses.")
            },
            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Malformed expression at token {position}: operator '{operator}' has no right operand."),
            Self::ExpectedOperand { token } => {
                write!(f, "Malformed expression: expected a value, found '{token}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Malformed expression at token {position}: unexpected '{token}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
