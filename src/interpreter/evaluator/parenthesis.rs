use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            core::{Calculator, EvalResult},
            trace::{StageKind, Trace, record},
        },
        lexer::TokenKind,
        token::Token,
    },
};

impl Calculator {
    /// Replaces every parenthesis group with the value it encloses.
    ///
    /// The rightmost `(` is matched with the nearest `)` after it. The run
    /// between them contains no parentheses, so it is reduced with the
    /// multiplicative and additive passes, and the whole span, parentheses
    /// included, becomes one number token. This repeats until no `(` is
    /// left, which resolves nested groups from the inside out.
    ///
    /// # Errors
    /// - `UnmatchedParenthesis` if a `(` has no `)` after it, or a `)` is
    ///   left over.
    /// - `EmptyGroup` for `()`.
    /// - Any error raised while a group is reduced.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{evaluator::core::Calculator, lexer::tokenize};
    ///
    /// let calculator = Calculator::new();
    /// let tokens = calculator.resolve_parentheses(tokenize("2*((1+2)*3)")).unwrap();
    ///
    /// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    /// assert_eq!(texts, ["2", "*", "9"]);
    /// ```
    pub fn resolve_parentheses(&self, tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
        self.resolve_parentheses_traced(tokens, None)
    }

    pub(crate) fn resolve_parentheses_traced(&self,
                                             mut tokens: Vec<Token>,
                                             mut trace: Option<&mut Trace>)
                                             -> EvalResult<Vec<Token>> {
        while let Some(open) = tokens.iter().rposition(|t| t.kind() == TokenKind::LParen) {
            let close = tokens[open + 1..].iter()
                                          .position(|t| t.kind() == TokenKind::RParen)
                                          .map(|offset| open + 1 + offset)
                                          .ok_or_else(|| ParseError::UnmatchedParenthesis { token: tokens[open].to_string() })?;

            if close == open + 1 {
                return Err(ParseError::EmptyGroup { position: open }.into());
            }

            let value = self.reduce_run(&tokens[open + 1..close])?;

            let mut resolved = Vec::with_capacity(tokens.len() - (close - open));
            resolved.extend_from_slice(&tokens[..open]);
            resolved.push(Token::number(value));
            resolved.extend_from_slice(&tokens[close + 1..]);
            tokens = resolved;

            record(trace.as_deref_mut(), StageKind::GroupResolved, &tokens);
        }

        if let Some(stray) = tokens.iter().find(|t| t.kind() == TokenKind::RParen) {
            return Err(ParseError::UnmatchedParenthesis { token: stray.to_string() }.into());
        }

        Ok(tokens)
    }
}
