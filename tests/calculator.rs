use foldcalc::{
    error::{ErrorCause, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::{
            core::Calculator,
            trace::{StageKind, Trace},
            validate::validate,
        },
        lexer::tokenize,
        variables::VariableTable,
    },
};

const TOLERANCE: f64 = 1e-9;

fn assert_value(calculator: &Calculator, expression: &str, expected: f64) {
    match calculator.calculate(expression) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "'{expression}' = {value}, expected {expected}"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn cause_of(calculator: &Calculator, expression: &str) -> ErrorCause {
    match calculator.calculate(expression) {
        Ok(value) => panic!("'{expression}' succeeded with {value} but was expected to fail"),
        Err(e) => e.cause().clone(),
    }
}

#[test]
fn additive_chains_are_left_associative() {
    let calculator = Calculator::new();
    assert_value(&calculator, "1+24-8+3-21", -1.0);
    assert_value(&calculator, "10-4-3", 3.0);
}

#[test]
fn decimal_addition() {
    assert_value(&Calculator::new(), "23.56+1.2", 24.76);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let calculator = Calculator::new();
    assert_value(&calculator, "2+3*4", 14.0);
    assert_value(&calculator, "2*3+4", 10.0);
    assert_value(&calculator, "12/4*3", 9.0);
    assert_value(&calculator, "12/(4*3)", 1.0);
}

#[test]
fn variables_resolve_through_the_table() {
    let mut calculator = Calculator::new();
    calculator.set_variable('x', 3.0);
    assert_value(&calculator, "10-2-x", 5.0);

    calculator.set_variable('y', 8.0);
    assert_value(&calculator, "-y", -8.0);
    assert_value(&calculator, "y", 8.0);
}

#[test]
fn innermost_parenthesis_first() {
    let calculator = Calculator::new();
    assert_value(&calculator, "1*2.0/(0.2/2+3.9*1)-4.5/3.0", -1.0);
    assert_value(&calculator, "2+((5+3*2-1)-(5*1-2.5)*2)", 7.0);
}

#[test]
fn nested_groups_resolve_before_outer_operator() {
    let calculator = Calculator::new();
    let mut trace = Trace::new();
    calculator.calculate_traced("2+((5+3*2-1)-(5*1-2.5)*2)", &mut trace)
              .unwrap();

    let groups: Vec<String> =
        trace.stages()
             .iter()
             .filter(|s| s.kind == StageKind::GroupResolved)
             .map(|s| s.tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "))
             .collect();

    assert_eq!(groups,
               ["2 + ( ( 5 + 3 * 2 - 1 ) - 2.5 * 2 )",
                "2 + ( 10 - 2.5 * 2 )",
                "2 + 5"]);
}

#[test]
fn trailing_operator_is_malformed() {
    let calculator = Calculator::new();
    let err = calculator.calculate("2/").unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(err.expression(), "2/");
    assert_eq!(*err.cause(),
               ErrorCause::Parse(ParseError::MissingOperand { operator: "/".to_string(),
                                                              position: 1 }));
}

#[test]
fn unbalanced_parentheses_are_malformed() {
    let calculator = Calculator::new();
    assert_eq!(cause_of(&calculator, "(1+2"),
               ErrorCause::Parse(ParseError::UnbalancedParentheses { open: 1, close: 0 }));
    assert_eq!(cause_of(&calculator, "1+2)"),
               ErrorCause::Parse(ParseError::UnbalancedParentheses { open: 0, close: 1 }));
    assert!(matches!(cause_of(&calculator, ")1("), ErrorCause::Parse(_)));
}

#[test]
fn empty_input_and_empty_groups_are_malformed() {
    let calculator = Calculator::new();
    assert_eq!(cause_of(&calculator, ""), ErrorCause::Parse(ParseError::EmptyExpression));
    assert_eq!(cause_of(&calculator, "1+()"),
               ErrorCause::Parse(ParseError::EmptyGroup { position: 2 }));
}

#[test]
fn adjacent_operators_or_operands_are_malformed() {
    let calculator = Calculator::new();
    assert!(calculator.calculate("1+*2").unwrap_err().is_malformed());
    assert!(calculator.calculate("2 3").unwrap_err().is_malformed());
    assert!(calculator.calculate("2(3)").unwrap_err().is_malformed());
    assert!(calculator.calculate("1*-2").unwrap_err().is_malformed());
}

#[test]
fn unknown_and_compound_variables_are_unresolved() {
    let mut calculator = Calculator::new();
    calculator.set_variable('x', 1.0);

    assert_eq!(cause_of(&calculator, "1+2+xy"),
               ErrorCause::Runtime(RuntimeError::UnresolvedOperand { operand: "xy".to_string() }));
    assert_eq!(cause_of(&calculator, "w*2"),
               ErrorCause::Runtime(RuntimeError::UnresolvedOperand { operand: "w".to_string() }));
    assert!(calculator.calculate("-w").unwrap_err().is_unresolved_operand());
}

#[test]
fn division_by_zero_is_an_error() {
    let calculator = Calculator::new();
    assert!(calculator.calculate("1/0").unwrap_err().is_division_by_zero());
    assert!(calculator.calculate("1/(3-3)").unwrap_err().is_division_by_zero());
    assert!(calculator.calculate("4%0").unwrap_err().is_division_by_zero());
    assert!(calculator.calculate("4%0.9").unwrap_err().is_division_by_zero());
}

#[test]
fn modulo_uses_truncated_integers() {
    let calculator = Calculator::new();
    assert_value(&calculator, "7%3", 1.0);
    assert_value(&calculator, "7.9%3.2", 1.0);
    assert_value(&calculator, "-7%3", -1.0);
    assert_value(&calculator, "7%(-3)", 1.0);
}

#[test]
fn modulo_operand_out_of_range() {
    let calculator = Calculator::new();
    let cause = cause_of(&calculator, "99999999999999999999%2");
    assert!(matches!(cause, ErrorCause::Runtime(RuntimeError::OperandOutOfRange { .. })));
}

#[test]
fn modulo_above_two_pow_53_is_exact() {
    let calculator = Calculator::new();
    assert_eq!(calculator.calculate("9007199254740992 % 9007199254740996").unwrap(),
               9_007_199_254_740_992.0);
    assert_eq!(calculator.calculate("9007199254740996 % 9007199254740994").unwrap(), 2.0);
}

#[test]
fn overflowing_literal_is_invalid_number() {
    let calculator = Calculator::new();
    let literal = "9".repeat(400);

    assert_eq!(cause_of(&calculator, &format!("{literal}+1")),
               ErrorCause::Runtime(RuntimeError::InvalidNumber { text: literal.clone() }));
    assert_eq!(cause_of(&calculator, &format!("{literal}-{literal}")),
               ErrorCause::Runtime(RuntimeError::InvalidNumber { text: literal }));
}

#[test]
fn non_finite_results_are_errors() {
    let mut calculator = Calculator::new();
    let near_max = "9".repeat(308);

    let cause = cause_of(&calculator, &format!("{near_max}*10"));
    assert!(matches!(cause, ErrorCause::Runtime(RuntimeError::NonFiniteResult { .. })));

    calculator.set_variable('x', f64::INFINITY);
    let cause = cause_of(&calculator, "x");
    assert!(matches!(cause, ErrorCause::Runtime(RuntimeError::NonFiniteResult { .. })));

    calculator.set_variable('x', f64::NAN);
    let cause = cause_of(&calculator, "1+x");
    assert!(matches!(cause, ErrorCause::Runtime(RuntimeError::NonFiniteResult { .. })));
}

#[test]
fn well_formed_sequences_reduce_to_one_token() {
    let mut calculator = Calculator::new();
    calculator.set_variable('x', 2.0);

    for source in ["1", "-x", "1+2*3", "(1+2)*(3-x)%4", "-(x)*x/4+1-2"] {
        let tokens = tokenize(source);
        validate(&tokens).unwrap();

        let tokens = calculator.resolve_parentheses(tokens).unwrap();
        let tokens = calculator.fold_multiplicative(tokens).unwrap();
        let tokens = calculator.fold_additive(tokens).unwrap();

        assert_eq!(tokens.len(), 1, "'{source}' left {tokens:?}");
    }
}

#[test]
fn each_binary_fold_removes_two_tokens() {
    let calculator = Calculator::new();
    let tokens = tokenize("1+2*3*4-5");
    let folded = calculator.fold_multiplicative(tokens.clone()).unwrap();
    assert_eq!(folded.len(), tokens.len() - 4);
}

#[test]
fn variable_table_outlives_calls() {
    let mut calculator = Calculator::new();
    calculator.set_variable('a', 1.0);
    assert_value(&calculator, "a+1", 2.0);

    calculator.set_variable('a', 10.0);
    assert_value(&calculator, "a+1", 11.0);

    assert_eq!(calculator.remove_variable('a'), Some(10.0));
    assert_eq!(calculator.get_variable('a'), None);
    assert!(calculator.calculate("a+1").unwrap_err().is_unresolved_operand());
}

#[test]
fn calculator_from_existing_table() {
    let table: VariableTable = [('x', 2.0), ('y', 5.0)].into_iter().collect();
    let calculator = Calculator::with_variables(table);

    assert_eq!(calculator.variables().len(), 2);
    assert_value(&calculator, "x*y", 10.0);
}

#[test]
fn evaluate_shortcut() {
    assert_eq!(evaluate("(x + 1) * 2", &[('x', 4.0)]).unwrap(), 10.0);
    assert!(evaluate("x", &[]).unwrap_err().is_unresolved_operand());
}

#[test]
fn failed_trace_keeps_completed_stages() {
    let calculator = Calculator::new();
    let mut trace = Trace::new();

    assert!(calculator.calculate_traced("(2/0)*(1+1)", &mut trace).is_err());

    let kinds: Vec<StageKind> = trace.stages().iter().map(|s| s.kind).collect();
    assert_eq!(kinds, [StageKind::Tokenized, StageKind::GroupResolved]);
}

#[test]
fn trace_prints_one_stage_per_line() {
    let calculator = Calculator::new();
    let mut trace = Trace::new();
    assert!(trace.is_empty());

    calculator.calculate_traced("(1 + 2) * 3", &mut trace).unwrap();

    assert_eq!(trace.stages()[0].to_string(), "after lexing: ( 1 + 2 ) * 3");
    assert_eq!(trace.to_string(),
               "after lexing: ( 1 + 2 ) * 3\n\
                after parenthesis: 3 * 3\n\
                after mul/div/mod: 9\n\
                after add/sub: 9\n");

    trace.clear();
    assert!(trace.is_empty());
    assert_eq!(trace.to_string(), "");
}

#[test]
fn errors_report_the_expression() {
    let calculator = Calculator::new();
    let message = calculator.calculate("5/0").unwrap_err().to_string();

    assert!(message.contains("'5/0'"), "{message}");
    assert!(message.contains("Division by zero"), "{message}");
}
