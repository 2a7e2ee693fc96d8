use logos::Logos;

use crate::interpreter::token::Token;

/// Classifies a lexical unit of an arithmetic expression.
///
/// Whitespace is skipped. A digit starts a number literal which may contain
/// one decimal point written as `.` or `,`. Any other character that is not
/// an operator or a parenthesis starts a variable literal that extends over
/// the ASCII letters following it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14` or `3,14`.
    #[regex(r"[0-9]+([.,][0-9]*)?")]
    Number,
    /// Variable literal tokens, such as `x`. Compound names like `xy` are
    /// tokenized but never resolve.
    #[regex(r"[^0-9+\-*/%() \t\r\n\f][a-zA-Z]*")]
    Variable,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl TokenKind {
    /// Returns `true` for tokens that stand for a value.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Number | Self::Variable)
    }

    /// Returns `true` for `*`, `/` and `%`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Star | Self::Slash | Self::Percent)
    }

    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Returns `true` for any of the five binary operators.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        self.is_multiplicative() || self.is_additive()
    }
}

/// Splits an expression into tokens, left to right.
///
/// Tokenizing is pure: the same input always yields the same sequence, and
/// no input is rejected here. Structural problems such as unbalanced
/// parentheses or trailing operators are reported by the evaluator.
///
/// # Example
/// ```
/// use foldcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("23.56 + x");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
///
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Plus, TokenKind::Variable]);
/// assert_eq!(tokens[0].text(), "23.56");
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        // Unmatched input stays a variable so that it fails to resolve.
        let kind = kind.unwrap_or(TokenKind::Variable);
        tokens.push(Token::new(kind, lexer.slice()));
    }

    tokens
}
