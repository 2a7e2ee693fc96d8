/// Core evaluation logic and calculator state.
///
/// Contains the `Calculator`, which owns the variable table, and the
/// top-level `calculate` pipeline that ties the passes together.
pub mod core;

/// Structural validation of token sequences.
///
/// Rejects empty input, unbalanced parentheses, empty groups and broken
/// operand/operator alternation before anything is folded.
pub mod validate;

/// Operand resolution.
///
/// Turns number and variable tokens into values.
pub mod operand;

/// Binary operator evaluation.
///
/// Defines the five arithmetic operators and how each is applied, including
/// integer modulo and the zero-divisor checks.
pub mod binary;

/// Parenthesis resolution.
///
/// Replaces parenthesis groups, innermost first, with the value they enclose.
pub mod parenthesis;

/// The multiplicative and additive folding passes.
pub mod fold;

/// Snapshots of the token sequence taken between passes.
pub mod trace;
