use crate::{
    error::{CalcError, ErrorCause},
    interpreter::{
        evaluator::{
            trace::{StageKind, Trace, record},
            validate::validate,
        },
        lexer::{TokenKind, tokenize},
        token::Token,
        variables::VariableTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`ErrorCause`] describing the failure.
pub type EvalResult<T> = Result<T, ErrorCause>;

/// Evaluates arithmetic expressions against a table of variables.
///
/// ## Usage
///
/// A `Calculator` is created once and reused. The variable table persists
/// across `calculate` calls and is changed between them with
/// [`set_variable`](Self::set_variable). Evaluation only borrows the
/// calculator immutably, so the table cannot change while a call is running.
///
/// # Example
/// ```
/// use foldcalc::interpreter::evaluator::core::Calculator;
///
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.calculate("1+24-8+3-21").unwrap(), -1.0);
///
/// calculator.set_variable('y', 8.0);
/// assert_eq!(calculator.calculate("-y").unwrap(), -8.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    /// Values bound to single-character names.
    pub(crate) variables: VariableTable,
}

impl Calculator {
    /// Creates a calculator with an empty variable table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: VariableTable::new() }
    }

    /// Creates a calculator that starts with the given variables.
    #[must_use]
    pub const fn with_variables(variables: VariableTable) -> Self {
        Self { variables }
    }

    /// Binds `name` to `value` for subsequent calculations.
    pub fn set_variable(&mut self, name: char, value: f64) {
        self.variables.set(name, value);
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: char) -> Option<f64> {
        self.variables.get(name)
    }

    /// Removes the binding for `name` and returns its former value.
    pub fn remove_variable(&mut self, name: char) -> Option<f64> {
        self.variables.remove(name)
    }

    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Evaluates an expression and returns its value.
    ///
    /// The expression is tokenized and validated first. Parenthesis groups
    /// are then resolved innermost first, followed by the multiplicative
    /// operators and finally the additive ones, each left to right.
    ///
    /// # Errors
    /// Returns a [`CalcError`] carrying the expression when it is malformed,
    /// refers to an unknown variable, or divides by zero. No partial value
    /// is ever returned.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::evaluator::core::Calculator;
    ///
    /// let calculator = Calculator::new();
    ///
    /// let value = calculator.calculate("2+((5+3*2-1)-(5*1-2.5)*2)").unwrap();
    /// assert_eq!(value, 7.0);
    ///
    /// assert!(calculator.calculate("2/").unwrap_err().is_malformed());
    /// assert!(calculator.calculate("1+2+xy").unwrap_err().is_unresolved_operand());
    /// ```
    pub fn calculate(&self, expression: &str) -> Result<f64, CalcError> {
        self.evaluate(expression, None)
            .map_err(|cause| CalcError::new(expression, cause))
    }

    /// Evaluates an expression and records each reduction stage in `trace`.
    ///
    /// Stages recorded before a failure are kept.
    ///
    /// # Example
    /// ```
    /// use foldcalc::interpreter::evaluator::{
    ///     core::Calculator,
    ///     trace::{StageKind, Trace},
    /// };
    ///
    /// let calculator = Calculator::new();
    /// let mut trace = Trace::new();
    ///
    /// let value = calculator.calculate_traced("(1+2)*3", &mut trace).unwrap();
    /// assert_eq!(value, 9.0);
    ///
    /// let kinds: Vec<StageKind> = trace.stages().iter().map(|s| s.kind).collect();
    /// assert_eq!(kinds,
    ///            [StageKind::Tokenized,
    ///             StageKind::GroupResolved,
    ///             StageKind::Multiplied,
    ///             StageKind::Added]);
    /// ```
    pub fn calculate_traced(&self, expression: &str, trace: &mut Trace) -> Result<f64, CalcError> {
        self.evaluate(expression, Some(trace))
            .map_err(|cause| CalcError::new(expression, cause))
    }

    fn evaluate(&self, expression: &str, mut trace: Option<&mut Trace>) -> EvalResult<f64> {
        let tokens = tokenize(expression);
        record(trace.as_deref_mut(), StageKind::Tokenized, &tokens);

        validate(&tokens)?;

        if let Some(value) = self.eval_trivial(&tokens)? {
            return Ok(value);
        }

        let tokens = self.resolve_parentheses_traced(tokens, trace.as_deref_mut())?;

        let tokens = self.fold_multiplicative(tokens)?;
        record(trace.as_deref_mut(), StageKind::Multiplied, &tokens);

        let tokens = self.fold_additive(tokens)?;
        record(trace, StageKind::Added, &tokens);

        self.single_value(&tokens)
    }

    /// Evaluates a lone operand, or a unary minus followed by an operand.
    ///
    /// Returns `None` for anything longer.
    fn eval_trivial(&self, tokens: &[Token]) -> EvalResult<Option<f64>> {
        match tokens {
            [operand] => Ok(Some(self.resolve_operand(operand)?)),
            [minus, operand] if minus.kind() == TokenKind::Minus => {
                Ok(Some(-self.resolve_operand(operand)?))
            },
            _ => Ok(None),
        }
    }
}
