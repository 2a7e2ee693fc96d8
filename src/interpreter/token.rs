use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// A classified lexical unit together with the text it was read from.
///
/// Tokens are immutable. Reduction never edits a token in place; it replaces
/// an operator and its operands with a new number token built by
/// [`Token::number`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token of the given kind from its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates a number token holding a computed value.
    ///
    /// The text is the shortest decimal form that reads back as the same
    /// `f64`.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{lexer::TokenKind, token::Token};
    ///
    /// let token = Token::number(-0.25);
    /// assert_eq!(token.kind(), TokenKind::Number);
    /// assert_eq!(token.text(), "-0.25");
    /// ```
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::new(TokenKind::Number, value.to_string())
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` for number and variable tokens.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        self.kind.is_operand()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
