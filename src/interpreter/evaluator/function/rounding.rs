use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::scalar::modulo, core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Largest number of decimals `round` accepts.
const MAX_DECIMALS: f64 = 15.0;

/// Applies a rounding function to a number or to a quantity's magnitude.
///
/// Supported rounding modes:
/// - `"floor"`: rounds toward negative infinity.
/// - `"ceil"`: rounds toward positive infinity.
/// - `"fix"`: rounds toward zero.
/// - `"round"`: rounds half away from zero.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::rounding::unary_round, value::core::Value};
///
/// assert_eq!(unary_round("floor", &[Value::Number(-2.5)], 1).unwrap(), Value::Number(-3.0));
/// assert_eq!(unary_round("fix", &[Value::Number(-2.5)], 1).unwrap(), Value::Number(-2.0));
/// ```
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(name, args, 1, line)?;

    let apply = |x: f64| match name {
        "floor" => x.floor(),
        "ceil" => x.ceil(),
        "fix" => x.trunc(),
        _ => x.round(),
    };

    match &args[0] {
        Value::Number(n) => Ok(Value::Number(apply(*n))),
        Value::Quantity(q) => Ok(Value::Quantity(q.with_value(apply(q.value)))),
        Value::Bool(_) => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Rounds a number, optionally to a number of decimals.
///
/// `round(x)` rounds to an integer. `round(x, n)` keeps `n` decimals, where
/// `n` must be an integer between 0 and 15.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::rounding::round, value::core::Value};
///
/// assert_eq!(round(&[Value::Number(2.5)], 1).unwrap(), Value::Number(3.0));
/// assert_eq!(round(&[Value::Number(3.14159), Value::Number(2.0)], 1).unwrap(),
///            Value::Number(3.14));
/// ```
pub fn round(args: &[Value], line: usize) -> EvalResult<Value> {
    let [value, decimals] = args else {
        return unary_round("round", args, line);
    };

    let value = value.as_number(line)?;
    let decimals = decimals.as_number(line)?;
    if decimals.fract() != 0.0 || !(0.0..=MAX_DECIMALS).contains(&decimals) {
        return Err(RuntimeError::TypeError { details: format!("number of decimals must be an integer between 0 and {MAX_DECIMALS}"),
                                             line });
    }

    let scale = 10f64.powf(decimals);
    Ok(Value::Number((value * scale).round() / scale))
}

/// `mod(x, y)`, the function form of `x % y`.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::rounding::modulus, value::core::Value};
///
/// assert_eq!(modulus(&[Value::Number(-7.0), Value::Number(3.0)], 1).unwrap(),
///            Value::Number(2.0));
/// ```
pub fn modulus(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("mod", args, 2, line)?;

    let dividend = args[0].as_number(line)?;
    let divisor = args[1].as_number(line)?;
    Ok(Value::Number(modulo(dividend, divisor)))
}
