use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{format::format_number, quantity::Quantity},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible results of evaluating an expression
/// or a unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number (double precision floating-point).
    Number(f64),
    /// A magnitude with a unit, such as `2 km` or `25 degC`.
    Quantity(Quantity),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.).
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        Self::Quantity(q)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is not a
    /// plain number.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_number(1).is_err());
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Returns the numeric magnitude of a number or quantity.
    ///
    /// Booleans have no magnitude. This is what result validation inspects
    /// for NaN and infinity.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::value::{core::Value, quantity::Quantity, unit::Unit};
    ///
    /// let meters = Quantity::new(3.0, Unit::parse("m").unwrap());
    /// assert_eq!(Value::Quantity(meters).magnitude(), Some(3.0));
    /// assert_eq!(Value::Bool(false).magnitude(), None);
    /// ```
    #[must_use]
    pub const fn magnitude(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Quantity(q) => Some(q.value),
            Self::Bool(_) => None,
        }
    }

    /// A short type label for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Quantity(_) => "quantity",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Quantity(q) => write!(f, "{q}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
