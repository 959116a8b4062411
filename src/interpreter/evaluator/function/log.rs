use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes the logarithm of a value, natural by default.
///
/// With two arguments the second is the base:
/// `log(value, base) = ln(value) / ln(base)`.
///
/// A base of 1 divides by zero and yields an infinity or NaN like any other
/// division. Non-numeric arguments produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let Value::Number(r) = log(&[Value::Number(8.0), Value::Number(2.0)], 1).unwrap() else {
///     panic!("expected a number");
/// };
/// assert!((r - 3.0).abs() < 1e-12);
/// ```
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [value] => Ok(Value::Number(value.as_number(line)?.ln())),
        [value, base] => {
            Ok(Value::Number(value.as_number(line)?.ln() / base.as_number(line)?.ln()))
        },
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "log".to_string(),
                                                       line }),
    }
}

/// Natural logarithm.
pub fn ln(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("ln", args, 1, line)?;
    Ok(Value::Number(args[0].as_number(line)?.ln()))
}

/// Base-10 logarithm.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::log::log10, value::core::Value};
///
/// let r = log10(&[Value::Number(1000.0)], 1).unwrap();
/// assert!((r.magnitude().unwrap() - 3.0).abs() < 1e-12);
/// ```
pub fn log10(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("log10", args, 1, line)?;
    Ok(Value::Number(args[0].as_number(line)?.log10()))
}

/// Base-2 logarithm.
pub fn log2(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("log2", args, 1, line)?;
    Ok(Value::Number(args[0].as_number(line)?.log2()))
}
