use crate::{
    error::ParseError,
    interpreter::{lexer::TokenKind, token::Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Checks that a token sequence is a well-formed expression.
///
/// The sequence must alternate operands and binary operators, starting and
/// ending with an operand. Parentheses may open wherever an operand is
/// expected and close wherever an operator is expected. A `-` at the start of
/// the expression or right after `(` is a unary minus.
///
/// Grammar (simplified):
/// ```text
///     expression := "-"? term (operator term)*
///     term       := number | variable | "(" expression ")"
/// ```
///
/// # Errors
/// - `EmptyExpression` for an empty sequence.
/// - `UnbalancedParentheses` when `(` and `)` counts differ.
/// - `UnmatchedParenthesis` when a `)` closes nothing.
/// - `EmptyGroup` for `()`.
/// - `MissingOperand` for an operator without a right operand, as in `2/`.
/// - `UnexpectedToken` for adjacent operators or adjacent operands.
///
/// # Example
/// ```
/// use foldcalc::{
///     error::ParseError,
///     interpreter::{evaluator::validate::validate, lexer::tokenize},
/// };
///
/// assert!(validate(&tokenize("-(1 + x) * 2")).is_ok());
///
/// let err = validate(&tokenize("2/")).unwrap_err();
/// assert!(matches!(err, ParseError::MissingOperand { position: 1, .. }));
/// ```
pub fn validate(tokens: &[Token]) -> ParseResult<()> {
    let Some(last) = tokens.last() else {
        return Err(ParseError::EmptyExpression);
    };

    let open = tokens.iter().filter(|t| t.kind() == TokenKind::LParen).count();
    let close = tokens.iter().filter(|t| t.kind() == TokenKind::RParen).count();
    if open != close {
        return Err(ParseError::UnbalancedParentheses { open, close });
    }

    let mut depth = 0usize;
    let mut expect_operand = true;
    let mut previous: Option<&Token> = None;

    for (position, token) in tokens.iter().enumerate() {
        let kind = token.kind();
        let previous_kind = previous.map(Token::kind);

        if expect_operand {
            match kind {
                k if k.is_operand() => expect_operand = false,
                TokenKind::LParen => depth += 1,
                TokenKind::Minus if matches!(previous_kind, None | Some(TokenKind::LParen)) => {},
                TokenKind::RParen if previous_kind == Some(TokenKind::LParen) => {
                    return Err(ParseError::EmptyGroup { position: position - 1 });
                },
                TokenKind::RParen if previous_kind.is_some_and(TokenKind::is_operator) => {
                    return Err(missing_operand(previous, position - 1));
                },
                _ => return Err(unexpected(token, position)),
            }
        } else {
            match kind {
                k if k.is_operator() => expect_operand = true,
                TokenKind::RParen => {
                    depth = depth.checked_sub(1)
                                 .ok_or_else(|| ParseError::UnmatchedParenthesis { token:
                                                                                       token.to_string() })?;
                },
                _ => return Err(unexpected(token, position)),
            }
        }

        previous = Some(token);
    }

    if expect_operand {
        return Err(missing_operand(Some(last), tokens.len() - 1));
    }

    Ok(())
}

fn unexpected(token: &Token, position: usize) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  position }
}

fn missing_operand(operator: Option<&Token>, position: usize) -> ParseError {
    ParseError::MissingOperand { operator: operator.map(ToString::to_string).unwrap_or_default(),
                                 position }
}
