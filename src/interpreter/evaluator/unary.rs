use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::factorial,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: negation of numbers and quantities. A quantity keeps its
    ///   unit.
    /// - `Factorial`: factorial of a number, through the gamma function for
    ///   non-integers.
    ///
    /// Booleans, and quantities under `!`, produce a type error.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use numtap::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// // 4! = 24
    /// let v = Context::eval_unary(UnaryOperator::Factorial, &Value::Number(4.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(24.0));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::Bool(true), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
            (UnaryOperator::Negate, Value::Quantity(q)) => {
                Ok(Value::Quantity(q.with_value(-q.value)))
            },
            (UnaryOperator::Factorial, Value::Number(n)) => Ok(Value::Number(factorial(*n))),
            (UnaryOperator::Negate, _) => {
                Err(RuntimeError::TypeError { details: format!("cannot negate a {}",
                                                               value.type_name()),
                                              line })
            },
            (UnaryOperator::Factorial, _) => {
                Err(RuntimeError::TypeError { details: format!("factorial of a {} is undefined",
                                                               value.type_name()),
                                              line })
            },
        }
    }
}
