use std::f64::consts::{E, PI, TAU};

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, quantity::Quantity, unit::Unit},
    },
};

/// Named constants, checked after variables and before units.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI),
                                        ("e", E),
                                        ("tau", TAU),
                                        ("phi", 1.618_033_988_749_895),
                                        ("Infinity", f64::INFINITY),
                                        ("NaN", f64::NAN)];

impl Context<'_> {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Literals never
    /// produce errors.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_literal(&7.0.into()), Value::Number(7.0));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Resolves a symbol.
    ///
    /// Lookup checks, in order:
    /// 1. Variables in the scope.
    /// 2. Named constants such as `pi`.
    /// 3. Units, which evaluate to a quantity of magnitude 1.
    ///
    /// If nothing matches, an `UndefinedSymbol` error is returned.
    ///
    /// # Example
    /// ```
    /// use numtap::{
    ///     calculator::scope::Scope,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.set("x", Value::Number(10.0));
    /// let context = Context::new(&mut scope);
    ///
    /// assert_eq!(context.eval_variable("x", 1).unwrap(), Value::Number(10.0));
    /// assert!(matches!(context.eval_variable("km", 1).unwrap(), Value::Quantity(_)));
    /// assert!(context.eval_variable("one", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.scope.get(name) {
            return Ok(value.clone());
        }
        if let Some(constant) = constant(name) {
            return Ok(Value::Number(constant));
        }
        if let Some(unit) = Unit::parse(name) {
            return Ok(Value::Quantity(Quantity::new(1.0, unit)));
        }
        Err(RuntimeError::UndefinedSymbol { name: name.to_string(),
                                            line })
    }

    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: Operand expression.
    /// - `line`: Line number.
    pub fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, line)
    }

    /// Evaluates both operands of a binary operator, left first, then applies
    /// the operator.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, line)
    }

    /// Evaluates the arguments of a call in order and invokes the builtin.
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;
        Self::eval_function(name, &arg_vals, line)
    }
}

/// Looks up a named constant.
///
/// # Example
/// ```
/// use numtap::interpreter::evaluator::utils::constant;
///
/// assert_eq!(constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(constant("km"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| *value)
}

/// Checks that a builtin received the number of arguments it expects.
///
/// # Parameters
/// - `name`: Function name, reported in the error.
/// - `args`: Argument slice.
/// - `expected`: Required length.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use numtap::interpreter::evaluator::utils::check_arity;
///
/// assert!(check_arity("sqrt", &[1.0], 1, 1).is_ok());
/// assert!(check_arity("sqrt", &[1.0, 2.0], 1, 1).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  line })
    }
}

/// Computes the factorial of a real number.
///
/// Non-negative integers up to 170 are multiplied out exactly; larger ones
/// overflow to infinity. Other values use the gamma function, `n! = Γ(n+1)`.
/// Negative integers have no factorial and yield NaN.
///
/// ## Example
/// ```
/// use numtap::interpreter::evaluator::utils::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(0.0), 1.0);
/// assert!((factorial(0.5) - 0.886_226_925_452_758).abs() < 1e-12);
/// assert!(factorial(-3.0).is_nan());
/// ```
#[must_use]
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() || n == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if n == f64::INFINITY {
        return n;
    }
    if n.fract() == 0.0 {
        if n < 0.0 {
            return f64::NAN;
        }
        if n > 170.0 {
            return f64::INFINITY;
        }
        let mut product = 1.0;
        let mut k = 2.0;
        while k <= n {
            product *= k;
            k += 1.0;
        }
        return product;
    }
    euler_gamma(n + 1.0)
}

/// Computes the Gamma function Γ(z) using the Lanczos approximation.
///
/// Uses the reflection formula for `z < 0.5`.
///
/// ## Example
/// ```
/// use numtap::interpreter::evaluator::utils::euler_gamma;
///
/// // Γ(5) = 4! = 24
/// let g = euler_gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        PI / ((PI * z).sin() * euler_gamma(1.0 - z))
    } else {
        let z_minus_1 = z - 1.0;
        let mut x = COEFFS[0];

        for (i, &c) in (1u32..).zip(COEFFS.iter().skip(1)) {
            x += c / (z_minus_1 + f64::from(i));
        }

        let t = z_minus_1 + G + 0.5;

        TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x
    }
}

/// Compares two floats for approximate equality.
///
/// The comparison uses the standard tolerance rule:
///
/// `|a − b| ≤ max(abs_tol, rel_tol * max(|a|, |b|))`
///
/// Equal infinities compare equal; NaN equals nothing.
///
/// # Example
/// ```
/// use numtap::interpreter::evaluator::utils::is_close;
///
/// assert!(is_close(0.1 + 0.2, 0.3, 1e-15, 1e-12));
/// assert!(!is_close(1.0, 1.1, 1e-15, 1e-12));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_close(left: f64, right: f64, abs_tol: f64, rel_tol: f64) -> bool {
    if left == right {
        return true;
    }
    let difference = (left - right).abs();
    let max_norm = left.abs().max(right.abs());
    difference <= abs_tol.max(rel_tol * max_norm)
}

/// Checks whether a name cannot be assigned to.
///
/// Builtin function names and named constants are reserved.
///
/// # Example
/// ```
/// use numtap::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sin"));
/// assert!(is_reserved_identifier("pi"));
/// assert!(!is_reserved_identifier("radius"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    use crate::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    BUILTIN_FUNCTIONS.contains(&name) || constant(name).is_some()
}
