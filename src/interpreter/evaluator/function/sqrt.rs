use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes the square root of a number.
///
/// Negative inputs have no real square root and yield NaN.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Number(16.0)], 1).unwrap(), Value::Number(4.0));
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("sqrt", args, 1, line)?;
    Ok(Value::Number(args[0].as_number(line)?.sqrt()))
}

/// Computes the `n`th root of a number, the square root when `n` is omitted.
///
/// Odd roots of negative numbers are real, so `nthRoot(-8, 3)` is `-2`.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::sqrt::nth_root, value::core::Value};
///
/// let r = nth_root(&[Value::Number(-8.0), Value::Number(3.0)], 1).unwrap();
/// assert!((r.magnitude().unwrap() + 2.0).abs() < 1e-12);
/// ```
pub fn nth_root(args: &[Value], line: usize) -> EvalResult<Value> {
    let (value, root) = match args {
        [value] => (value.as_number(line)?, 2.0),
        [value, root] => (value.as_number(line)?, root.as_number(line)?),
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { name: "nthRoot".to_string(),
                                                             line });
        },
    };

    let odd_root = root.fract() == 0.0 && root.rem_euclid(2.0) == 1.0;
    let result = if value < 0.0 && odd_root {
        -(-value).powf(root.recip())
    } else {
        value.powf(root.recip())
    };
    Ok(Value::Number(result))
}

/// Euclidean norm of the arguments, `sqrt(a² + b² + ...)`.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::sqrt::hypot, value::core::Value};
///
/// let r = hypot(&[Value::Number(3.0), Value::Number(4.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(5.0));
/// ```
pub fn hypot(args: &[Value], line: usize) -> EvalResult<Value> {
    let mut result = 0.0_f64;
    for arg in args {
        result = result.hypot(arg.as_number(line)?);
    }
    Ok(Value::Number(result))
}

/// `pow(x, y)`, the function form of `x ^ y`.
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("pow", args, 2, line)?;

    let base = args[0].as_number(line)?;
    let exponent = args[1].as_number(line)?;
    Ok(Value::Number(base.powf(exponent)))
}
