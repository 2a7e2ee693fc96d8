/// The evaluator module reduces token sequences to numbers.
///
/// The evaluator validates the token sequence, resolves parenthesis groups
/// from the innermost outwards, then folds multiplicative and additive
/// operators left to right until a single value remains.
///
/// # Responsibilities
/// - Rejects malformed expressions before any folding happens.
/// - Resolves operands through the variable table.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression text and produces the ordered sequence
/// of tokens that the evaluator consumes: numbers, variables, the five
/// arithmetic operators and parentheses. This is the first stage of
/// interpretation and it never fails.
pub mod lexer;
/// The token module defines the lexical units shared by lexer and evaluator.
///
/// A token pairs its kind with the literal text it was read from. Folding
/// creates fresh number tokens that carry the computed value as text.
pub mod token;
/// The variables module holds the values bound to single-letter names.
///
/// The table is owned by a calculator and outlives individual evaluations.
pub mod variables;
