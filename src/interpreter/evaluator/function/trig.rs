use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::{core::Value, unit::ANGLE},
    },
};

/// Reads an angle in radians.
///
/// Plain numbers are taken as radians. Quantities must be angles
/// (`90 deg`, `0.25 cycle`) and are converted to radians.
///
/// # Example
/// ```
/// use numtap::interpreter::{
///     evaluator::function::trig::as_radians,
///     value::{core::Value, quantity::Quantity, unit::Unit},
/// };
///
/// let right_angle = Value::Quantity(Quantity::new(90.0, Unit::parse("deg").unwrap()));
/// let radians = as_radians(&right_angle, "sin", 1).unwrap();
/// assert!((radians - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn as_radians(value: &Value, function: &str, line: usize) -> EvalResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Quantity(q) if q.unit.dimension() == ANGLE => Ok(q.to_si()),
        Value::Quantity(q) => {
            Err(RuntimeError::TypeError { details: format!("{function} expects an angle, found unit {}",
                                                           q.unit),
                                          line })
        },
        Value::Bool(_) => Err(RuntimeError::ExpectedNumber { line }),
    }
}

macro_rules! angle_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, line)?;

            Ok(Value::Number(as_radians(&args[0], stringify!($fname), line)?.$fname()))
        }
    };
}

angle_builtin!(sin);
angle_builtin!(cos);
angle_builtin!(tan);

/// Four-quadrant arctangent of `y / x`, in radians.
///
/// # Example
/// ```
/// use numtap::interpreter::{evaluator::function::trig::atan2, value::core::Value};
///
/// let r = atan2(&[Value::Number(1.0), Value::Number(1.0)], 1).unwrap();
/// assert!((r.magnitude().unwrap() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
pub fn atan2(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("atan2", args, 2, line)?;

    let y = args[0].as_number(line)?;
    let x = args[1].as_number(line)?;
    Ok(Value::Number(y.atan2(x)))
}
