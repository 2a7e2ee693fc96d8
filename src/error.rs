/// Structural errors.
///
/// Defines every way an expression can be malformed: unbalanced or empty
/// parentheses, operators without operands, operands without an operator
/// between them. These are detected before any folding takes place.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while operands are resolved and operators are
/// applied, such as unknown variables or division by zero.
pub mod runtime_error;
/// The error handed to callers of the calculator.
///
/// Wraps a parse or runtime error together with the raw expression that
/// caused it.
pub mod calc_error;
/// Variable binding errors.
///
/// Raised when a `name=value` assignment given on the command line cannot be
/// read.
pub mod binding_error;

pub use binding_error::BindingError;
pub use calc_error::{CalcError, ErrorCause};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
