//! # numtap
//!
//! numtap is a scientific calculator for the command line, written in Rust.
//! It evaluates arithmetic, trigonometric and algebraic expressions, keeps
//! variables across evaluations, converts between units and reports failures
//! as a small set of localized errors.
//!
//! ```
//! use numtap::{Language, Scope, evaluate};
//!
//! let mut scope = Scope::new();
//! let value = evaluate("x = 5; x + 3", &mut scope, Language::En).unwrap();
//! assert_eq!(value.to_string(), "8");
//!
//! let value = evaluate("2 km to meter", &mut scope, Language::En).unwrap();
//! assert_eq!(value.to_string(), "2000 meter");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` and `Statement` types that represent one
/// segment of input as a tree. The AST is built by the parser and traversed
/// by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all supported constructs.
/// - Attaches line numbers to AST nodes for error reporting.
pub mod ast;
/// The calculator built on top of the expression engine.
///
/// This module is what callers use: it evaluates whole input lines against a
/// session scope, resolves unit conversions and turns every failure into a
/// localized [`CalcError`].
///
/// # Responsibilities
/// - Splits input into segments and orders assignments before computations.
/// - Converts between units.
/// - Classifies and localizes errors.
pub mod calculator;
/// Terminal front ends: quick mode and the interactive loop.
pub mod console;
/// Provides error types for parsing, evaluation and calculation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a segment, and the classified errors the calculator returns.
///
/// # Responsibilities
/// - Defines error enums for all engine failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Defines the closed error taxonomy shown to users.
pub mod error;
/// The expression engine.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations, and exposes [`interpreter::execute`] to run one segment.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use calculator::{evaluate, language::Language, scope::Scope};
pub use error::{CalcError, ErrorKind};
pub use interpreter::value::core::Value;
