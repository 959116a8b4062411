use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{ABS_TOLERANCE, Context, EvalResult, REL_TOLERANCE},
            utils::is_close,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers compare directly. Quantities of the same dimension compare by
    /// their SI magnitude, so `1 km > 999 m` holds. Booleans support `==` and
    /// `!=` only.
    ///
    /// Equality is tolerant: values within [`REL_TOLERANCE`] of each other
    /// are equal, which makes `0.1 + 0.2 == 0.3` true. `<=` and `>=` accept
    /// such values as well, `<` and `>` reject them.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use numtap::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1).unwrap();
    /// assert_eq!(result, Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(compare_numbers(op, *a, *b))),
            (Value::Quantity(a), Value::Quantity(b)) => {
                if !a.unit.is_compatible(&b.unit) {
                    return Err(RuntimeError::IncompatibleUnits { from: a.unit.name().to_string(),
                                                                 to: b.unit.name().to_string(),
                                                                 line });
                }
                Ok(Value::Bool(compare_numbers(op, a.to_si(), b.to_si())))
            },
            (Value::Bool(a), Value::Bool(b)) => match op {
                BinaryOperator::Equal => Ok(Value::Bool(a == b)),
                BinaryOperator::NotEqual => Ok(Value::Bool(a != b)),
                _ => Err(type_mismatch(op, left, right, line)),
            },
            _ => Err(type_mismatch(op, left, right, line)),
        }
    }
}

/// Applies a relational operator to two floats with tolerant equality.
///
/// Any comparison involving NaN is false, except `!=`.
///
/// # Example
/// ```
/// use numtap::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::compare_numbers};
///
/// assert!(compare_numbers(BinaryOperator::Equal, 0.1 + 0.2, 0.3));
/// assert!(!compare_numbers(BinaryOperator::Less, 0.3, 0.1 + 0.2));
/// assert!(compare_numbers(BinaryOperator::NotEqual, f64::NAN, f64::NAN));
/// ```
#[must_use]
pub fn compare_numbers(op: BinaryOperator, left: f64, right: f64) -> bool {
    let close = is_close(left, right, ABS_TOLERANCE, REL_TOLERANCE);
    match op {
        BinaryOperator::Equal => close,
        BinaryOperator::NotEqual => !close,
        BinaryOperator::Less => left < right && !close,
        BinaryOperator::Greater => left > right && !close,
        BinaryOperator::LessEqual => left < right || close,
        BinaryOperator::GreaterEqual => left > right || close,
        _ => false,
    }
}
