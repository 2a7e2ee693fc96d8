use std::fs;

use foldcalc::{
    error::{ErrorCause, RuntimeError},
    interpreter::{evaluator::core::Calculator, variables::Binding},
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut calculator = Calculator::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(binding) = line.strip_prefix("let ") {
                let binding: Binding =
                    binding.parse()
                           .unwrap_or_else(|e| panic!("{path:?}:{}: bad binding: {e}", i + 1));
                calculator.set_variable(binding.name, binding.value);
                continue;
            }

            count += 1;
            let (expression, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            check(&calculator, expression.trim(), expected.trim(), &format!("{path:?}:{}", i + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check(calculator: &Calculator, expression: &str, expected: &str, location: &str) {
    let result = calculator.calculate(expression);

    match expected {
        "malformed" => assert!(result.as_ref().is_err_and(|e| e.is_malformed()),
                               "{location}: '{expression}' should be malformed, got {result:?}"),
        "unresolved" => assert!(result.as_ref().is_err_and(|e| e.is_unresolved_operand()),
                                "{location}: '{expression}' should be unresolved, got {result:?}"),
        "division by zero" => assert!(result.as_ref().is_err_and(|e| e.is_division_by_zero()),
                                      "{location}: '{expression}' should divide by zero, got {result:?}"),
        "invalid number" => assert!(matches!(result.as_ref().map_err(|e| e.cause()),
                                             Err(ErrorCause::Runtime(RuntimeError::InvalidNumber { .. }))),
                                    "{location}: '{expression}' should be an invalid number, got {result:?}"),
        "non-finite" => assert!(matches!(result.as_ref().map_err(|e| e.cause()),
                                         Err(ErrorCause::Runtime(RuntimeError::NonFiniteResult { .. }))),
                                "{location}: '{expression}' should not be finite, got {result:?}"),
        number => {
            let expected: f64 = number.parse()
                                      .unwrap_or_else(|e| panic!("{location}: bad expectation: {e}"));
            match result {
                Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                                     "{location}: '{expression}' = {value}, expected {expected}"),
                Err(e) => panic!("{location}: '{expression}' failed: {e}"),
            }
        },
    }
}
