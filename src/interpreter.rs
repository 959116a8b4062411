use crate::{
    calculator::scope::Scope,
    error::InterpreterError,
    interpreter::{
        evaluator::core::Context,
        parser::{core::tokenize, statement::parse_segment},
        value::core::Value,
    },
};

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, resolves symbols against the scope,
/// constants and the unit table, performs arithmetic and comparisons, and
/// calls builtin functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Stores assigned variables in the session scope.
/// - Reports runtime errors such as undefined symbols or mismatched units.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens: numbers,
/// identifiers, operators and delimiters. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Reports characters that belong to no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents one assignment or expression.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with location info.
/// - Supports arithmetic, implicit multiplication, function calls and
///   assignments.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values an expression can produce (numbers,
/// quantities and booleans), the unit table behind quantities, and number
/// formatting.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Quantity` and `Unit` types.
/// - Converts quantities between compatible units.
/// - Renders numbers for display.
pub mod value;

/// Lexes, parses and evaluates a single segment.
///
/// The segment must hold exactly one assignment or expression; `;`
/// splitting happens in the calculator layer. Assignments update `scope`.
///
/// # Errors
/// Returns an `InterpreterError` if the segment does not parse or fails to
/// evaluate.
///
/// # Examples
/// ```
/// use numtap::{
///     calculator::scope::Scope,
///     interpreter::{execute, value::core::Value},
/// };
///
/// let mut scope = Scope::new();
/// assert_eq!(execute("r = 2", &mut scope).unwrap(), Value::Number(2.0));
/// assert_eq!(execute("r ^ 2 + 1", &mut scope).unwrap(), Value::Number(5.0));
///
/// // 'y' is not defined
/// assert!(execute("y + 1", &mut scope).is_err());
/// ```
pub fn execute(source: &str, scope: &mut Scope) -> Result<Value, InterpreterError> {
    let tokens = tokenize(source)?;
    let statement = parse_segment(&tokens)?;
    let mut context = Context::new(scope);
    Ok(context.eval_statement(&statement)?)
}
