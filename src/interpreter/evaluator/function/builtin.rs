use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Applies a unary builtin function to a plain number.
///
/// The generated functions accept exactly one numeric argument and return a
/// `Value::Number`. Results outside the real domain, such as `asin(2)`, are
/// NaN. Quantities and booleans produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::builtin::exp, value::core::Value};
///
/// let r = exp(&[Value::Number(0.0)], 1).unwrap();
///
/// assert_eq!(r, Value::Number(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, line)?;

            Ok(Value::Number(args[0].as_number(line)?.$real_fn()))
        }
    };
}

real_builtin!(exp, exp);
real_builtin!(cbrt, cbrt);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);

/// Returns the absolute value of a number or quantity.
///
/// A quantity keeps its unit.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(&[Value::Number(-2.5)], 1).unwrap(), Value::Number(2.5));
/// ```
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("abs", args, 1, line)?;

    match &args[0] {
        Value::Number(n) => Ok(Value::Number(n.abs())),
        Value::Quantity(q) => Ok(Value::Quantity(q.with_value(q.value.abs()))),
        Value::Bool(_) => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Returns the numeric sign of a value.
///
/// Accepts exactly one argument and returns `-1`, `0` or `1`. For a
/// quantity the sign of its magnitude is returned. NaN stays NaN.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::builtin::sign, value::core::Value};
///
/// assert_eq!(sign(&[Value::Number(-3.0)], 1).unwrap(), Value::Number(-1.0));
/// assert_eq!(sign(&[Value::Number(0.0)], 1).unwrap(), Value::Number(0.0));
/// ```
pub fn sign(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sign", args, 1, line)?;

    let value = match &args[0] {
        Value::Number(n) => *n,
        Value::Quantity(q) => q.value,
        Value::Bool(_) => return Err(RuntimeError::ExpectedNumber { line }),
    };

    let sign = if value.is_nan() || value == 0.0 {
        value
    } else {
        value.signum()
    };
    Ok(Value::Number(sign))
}

/// The factorial as a function, identical to the postfix `!` operator.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::builtin::factorial, value::core::Value};
///
/// assert_eq!(factorial(&[Value::Number(5.0)], 1).unwrap(), Value::Number(120.0));
/// ```
pub fn factorial(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("factorial", args, 1, line)?;

    let n = args[0].as_number(line)?;
    Ok(Value::Number(crate::interpreter::evaluator::utils::factorial(n)))
}
