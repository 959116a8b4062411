use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Applies an infix operator to two evaluated operands.
    ///
    /// Comparisons go to `eval_comparison`. Arithmetic on two plain numbers
    /// goes to `eval_scalar_op`, and arithmetic with a quantity on either side
    /// to `eval_quantity_op`. Booleans are only accepted by comparisons; any
    /// other mix is a `TypeError`.
    ///
    /// # Example
    /// ```
    /// use numtap::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };
        use Value::{Number, Quantity};

        match op {
            Add | Sub | Mul | Div | Mod | Pow => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(Self::eval_scalar_op(op, *a, *b))),
                (Quantity(_), Number(_) | Quantity(_)) | (Number(_), Quantity(_)) => {
                    Self::eval_quantity_op(op, left, right, line)
                },
                _ => Err(type_mismatch(op, left, right, line)),
            },

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
        }
    }
}

/// Builds the error for an operator applied to operands it does not support.
#[must_use]
pub fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply {op} to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
