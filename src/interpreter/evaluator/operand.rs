use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{Calculator, EvalResult},
        lexer::TokenKind,
        token::Token,
    },
};

impl Calculator {
    /// Resolves an operand token to its value.
    ///
    /// Number tokens are parsed as `f64`, reading `,` as a decimal point.
    /// Variable tokens resolve only when their text is exactly one character
    /// bound in the variable table.
    ///
    /// # Errors
    /// - `RuntimeError::UnresolvedOperand` for unknown or multi-character
    ///   variables.
    /// - `RuntimeError::NonFiniteResult` for a variable bound to an infinity
    ///   or `NaN`.
    /// - `RuntimeError::InvalidNumber` if a number literal does not parse to
    ///   a finite value.
    /// - `ParseError::ExpectedOperand` for operator and parenthesis tokens.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{
    ///     evaluator::core::Calculator,
    ///     lexer::TokenKind,
    ///     token::Token,
    /// };
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.set_variable('x', 3.0);
    ///
    /// let x = Token::new(TokenKind::Variable, "x");
    /// let xy = Token::new(TokenKind::Variable, "xy");
    /// let n = Token::new(TokenKind::Number, "3,5");
    ///
    /// assert_eq!(calculator.resolve_operand(&x).unwrap(), 3.0);
    /// assert_eq!(calculator.resolve_operand(&n).unwrap(), 3.5);
    /// assert!(calculator.resolve_operand(&xy).is_err());
    /// ```
    pub fn resolve_operand(&self, token: &Token) -> EvalResult<f64> {
        let text = token.text();

        match token.kind() {
            TokenKind::Number => {
                text.replace(',', ".")
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| RuntimeError::InvalidNumber { text: text.to_string() }.into())
            },
            TokenKind::Variable => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(name), None) => {
                        let value = self.variables
                                        .get(name)
                                        .ok_or_else(|| RuntimeError::unresolved(text))?;
                        if !value.is_finite() {
                            return Err(RuntimeError::NonFiniteResult { value }.into());
                        }
                        Ok(value)
                    },
                    _ => Err(RuntimeError::unresolved(text).into()),
                }
            },
            _ => Err(ParseError::ExpectedOperand { token: text.to_string() }.into()),
        }
    }
}
