use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the minimum or maximum of one or more values.
///
/// Either all arguments are numbers, or all are quantities of the same
/// dimension; quantities are compared by their SI magnitude and the winning
/// argument is returned unchanged. A NaN argument makes the result NaN.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing at least one argument.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let values = [Value::Number(3.0), Value::Number(7.0), Value::Number(-1.0)];
/// assert_eq!(min_max("min", &values, 1).unwrap(), Value::Number(-1.0));
/// assert_eq!(min_max("max", &values, 1).unwrap(), Value::Number(7.0));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let Some((first, rest)) = args.split_first() else {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         line });
    };

    let mut best = first;
    let mut best_key = sort_key(first, first, name, line)?;

    for candidate in rest {
        let key = sort_key(candidate, first, name, line)?;
        if key.is_nan() {
            return Ok(Value::Number(f64::NAN));
        }
        let better = if name == "min" {
            key < best_key
        } else {
            key > best_key
        };
        if better {
            best = candidate;
            best_key = key;
        }
    }

    if best_key.is_nan() {
        return Ok(Value::Number(f64::NAN));
    }
    Ok(best.clone())
}

/// Returns the magnitude used for ordering, checking that `value` is of the
/// same kind as the first argument.
fn sort_key(value: &Value, first: &Value, name: &str, line: usize) -> EvalResult<f64> {
    match (value, first) {
        (Value::Number(n), Value::Number(_)) => Ok(*n),
        (Value::Quantity(q), Value::Quantity(reference)) => {
            if !q.unit.is_compatible(&reference.unit) {
                return Err(RuntimeError::IncompatibleUnits { from: reference.unit.name().to_string(),
                                                             to: q.unit.name().to_string(),
                                                             line });
            }
            Ok(q.to_si())
        },
        _ => {
            Err(RuntimeError::TypeError { details: format!("{name} cannot mix a {} with a {}",
                                                           first.type_name(),
                                                           value.type_name()),
                                          line })
        },
    }
}
