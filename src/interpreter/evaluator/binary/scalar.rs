use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Evaluates an arithmetic operation on two numbers.
    ///
    /// All operations follow IEEE 754: division by zero yields an infinity
    /// or NaN instead of an error, and the caller decides what to do with
    /// non-finite results. Modulo takes the sign of the divisor, and `x % 0`
    /// is `x`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use numtap::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0), 3.0);
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, 5.0, 0.0), f64::INFINITY);
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0), 2.0);
    /// ```
    #[must_use]
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            Mod => modulo(left, right),
            Pow => left.powf(right),
            _ => f64::NAN,
        }
    }
}

/// Floored modulo: the result has the sign of `divisor`.
///
/// # Example
/// ```
/// use numtap::interpreter::evaluator::binary::scalar::modulo;
///
/// assert_eq!(modulo(7.0, 3.0), 1.0);
/// assert_eq!(modulo(7.0, -3.0), -2.0);
/// assert_eq!(modulo(4.0, 0.0), 4.0);
/// ```
#[must_use]
pub fn modulo(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return dividend;
    }
    dividend - divisor * (dividend / divisor).floor()
}
