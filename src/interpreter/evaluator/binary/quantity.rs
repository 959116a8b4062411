use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{core::type_mismatch, scalar::modulo},
            core::{Context, EvalResult},
        },
        value::{core::Value, quantity::Quantity},
    },
};

impl Context<'_> {
    /// Evaluates arithmetic where at least one operand is a quantity.
    ///
    /// Supported combinations:
    /// - `q1 + q2`, `q1 - q2`, `q1 % q2`: `q2` is converted to the unit of
    ///   `q1` and the result keeps that unit.
    /// - `q1 / q2`: a plain number, the ratio of both magnitudes in SI units.
    /// - `q * n`, `n * q`, `q / n`: the magnitude is scaled, the unit kept.
    ///
    /// Mixing dimensions fails with `IncompatibleUnits`; every other
    /// combination, such as `q ^ n` or `n / q`, is a type error.
    ///
    /// # Example
    /// ```
    /// use numtap::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{core::Value, quantity::Quantity, unit::Unit},
    ///     },
    /// };
    ///
    /// let km = Value::Quantity(Quantity::new(1.0, Unit::parse("km").unwrap()));
    /// let m = Value::Quantity(Quantity::new(500.0, Unit::parse("m").unwrap()));
    ///
    /// let sum = Context::eval_quantity_op(BinaryOperator::Add, &km, &m, 1).unwrap();
    /// assert_eq!(sum.to_string(), "1.5 km");
    ///
    /// let ratio = Context::eval_quantity_op(BinaryOperator::Div, &km, &m, 1).unwrap();
    /// assert_eq!(ratio, Value::Number(2.0));
    /// ```
    pub fn eval_quantity_op(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            line: usize)
                            -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match (op, left, right) {
            (Add | Sub | Mod, Value::Quantity(a), Value::Quantity(b)) => {
                let b = convert(b, a, line)?;
                let value = match op {
                    Add => a.value + b.value,
                    Sub => a.value - b.value,
                    _ => modulo(a.value, b.value),
                };
                Ok(Value::Quantity(a.with_value(value)))
            },
            (Div, Value::Quantity(a), Value::Quantity(b)) => {
                if !a.unit.is_compatible(&b.unit) {
                    return Err(incompatible(a, b, line));
                }
                Ok(Value::Number(a.to_si() / b.to_si()))
            },
            (Mul, Value::Quantity(q), Value::Number(n))
            | (Mul, Value::Number(n), Value::Quantity(q)) => {
                Ok(Value::Quantity(q.with_value(q.value * n)))
            },
            (Div, Value::Quantity(q), Value::Number(n)) => {
                Ok(Value::Quantity(q.with_value(q.value / n)))
            },
            _ => Err(type_mismatch(op, left, right, line)),
        }
    }
}

/// Expresses `quantity` in the unit of `like`.
fn convert(quantity: &Quantity, like: &Quantity, line: usize) -> EvalResult<Quantity> {
    quantity.to(&like.unit)
            .ok_or_else(|| incompatible(like, quantity, line))
}

fn incompatible(left: &Quantity, right: &Quantity, line: usize) -> RuntimeError {
    RuntimeError::IncompatibleUnits { from: left.unit.name().to_string(),
                                      to: right.unit.name().to_string(),
                                      line }
}
