use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            binary::BinaryOperator,
            core::{Calculator, EvalResult},
        },
        lexer::TokenKind,
        token::Token,
    },
};

impl Calculator {
    /// Folds a leading `-` and the operand after it into one number token.
    ///
    /// Sequences that do not start with `-` followed by an operand are
    /// returned unchanged.
    pub fn fold_leading_negation(&self, tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
        let negated = match tokens.as_slice() {
            [minus, operand, ..] if minus.kind() == TokenKind::Minus && operand.is_operand() => {
                -self.resolve_operand(operand)?
            },
            _ => return Ok(tokens),
        };

        let mut folded = Vec::with_capacity(tokens.len() - 1);
        folded.push(Token::number(negated));
        folded.extend_from_slice(&tokens[2..]);
        Ok(folded)
    }

    /// Folds every `*`, `/` and `%` into a number token, left to right.
    ///
    /// Each operator is applied to the operand before it, which may itself be
    /// the result of the previous fold, and the operand after it. The
    /// returned sequence holds only operands and additive operators. The
    /// input must be free of parentheses.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{evaluator::core::Calculator, lexer::tokenize};
    ///
    /// let calculator = Calculator::new();
    /// let tokens = calculator.fold_multiplicative(tokenize("1+3*2/4-5%3")).unwrap();
    ///
    /// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    /// assert_eq!(texts, ["1", "+", "1.5", "-", "2"]);
    /// ```
    pub fn fold_multiplicative(&self, tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
        let tokens = self.fold_leading_negation(tokens)?;
        let mut folded: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut iter = tokens.into_iter().enumerate();

        while let Some((position, token)) = iter.next() {
            let op = match BinaryOperator::from_kind(token.kind()) {
                Some(op) if op.is_multiplicative() => op,
                _ => {
                    folded.push(token);
                    continue;
                },
            };

            let left = folded.pop()
                             .filter(Token::is_operand)
                             .ok_or_else(|| unexpected(&token, position))?;
            let right = next_operand(&mut iter, &token, position)?;

            let value = Self::eval_binary(op,
                                          self.resolve_operand(&left)?,
                                          self.resolve_operand(&right)?)?;
            folded.push(Token::number(value));
        }

        Ok(folded)
    }

    /// Folds every `+` and `-` into a running value, left to right.
    ///
    /// The input must already have been through
    /// [`fold_multiplicative`](Self::fold_multiplicative). On success the
    /// result is a single number token.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::{evaluator::core::Calculator, lexer::tokenize};
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.set_variable('x', 3.0);
    ///
    /// let tokens = calculator.fold_additive(tokenize("-10-2-x")).unwrap();
    /// assert_eq!(tokens.len(), 1);
    /// assert_eq!(tokens[0].text(), "-15");
    /// ```
    pub fn fold_additive(&self, tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
        let tokens = self.fold_leading_negation(tokens)?;
        let mut iter = tokens.into_iter().enumerate();

        let Some((position, first)) = iter.next() else {
            return Err(ParseError::EmptyExpression.into());
        };
        if !first.is_operand() {
            return Err(unexpected(&first, position).into());
        }

        let mut total = self.resolve_operand(&first)?;

        while let Some((position, token)) = iter.next() {
            let op = match BinaryOperator::from_kind(token.kind()) {
                Some(op) if !op.is_multiplicative() => op,
                _ => return Err(unexpected(&token, position).into()),
            };
            let right = next_operand(&mut iter, &token, position)?;

            total = Self::eval_binary(op, total, self.resolve_operand(&right)?)?;
        }

        Ok(vec![Token::number(total)])
    }

    /// Reduces a parenthesis-free run of tokens to its value.
    pub(crate) fn reduce_run(&self, tokens: &[Token]) -> EvalResult<f64> {
        let tokens = self.fold_multiplicative(tokens.to_vec())?;
        let tokens = self.fold_additive(tokens)?;
        self.single_value(&tokens)
    }

    /// Returns the value of a fully reduced sequence.
    pub(crate) fn single_value(&self, tokens: &[Token]) -> EvalResult<f64> {
        match tokens {
            [token] => self.resolve_operand(token),
            [] => Err(ParseError::EmptyExpression.into()),
            [_, extra, ..] => Err(unexpected(extra, 1).into()),
        }
    }
}

/// Takes the operand following an operator from the token stream.
fn next_operand<I>(iter: &mut I, operator: &Token, position: usize) -> Result<Token, ParseError>
    where I: Iterator<Item = (usize, Token)>
{
    match iter.next() {
        Some((_, token)) if token.is_operand() => Ok(token),
        Some((position, token)) => Err(unexpected(&token, position)),
        None => Err(ParseError::MissingOperand { operator: operator.to_string(),
                                                 position }),
    }
}

fn unexpected(token: &Token, position: usize) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  position }
}
