/// Parser entry points and the shared result type.
pub mod core;

/// Prefix, postfix and primary expressions.
///
/// Handles unary minus and plus, exponentiation, factorials, literals,
/// symbols, function calls and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels for comparisons, addition, explicit and
/// implicit multiplication.
pub mod binary;

/// Helpers shared by the parsing functions.
pub mod utils;

/// Statement parsing.
///
/// A statement is either an assignment or a bare expression.
pub mod statement;
