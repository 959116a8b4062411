/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include stray operators, unbalanced parentheses,
/// unknown characters and assignments to reserved names.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined symbols, unknown functions, type mismatches and
/// incompatible units.
pub mod runtime_error;
/// Calculation errors.
///
/// The classified, localized errors the calculator hands to its callers.
pub mod calc_error;

pub use calc_error::{CalcError, ErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by the expression engine.
///
/// The calculator layer never shows these to users directly; it classifies
/// them into a `CalcError` first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpreterError {
    /// The segment could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The segment parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
