use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, log, min_max, rounding, sqrt, trig},
        },
        value::core::Value,
    },
};

/// Handler behind a builtin: evaluated arguments in, value out. The line is
/// only used for errors.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// How many arguments a builtin accepts.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Expands `"name" => { arity, func }` entries into the private `BUILTINS`
/// lookup table and the public `BUILTIN_FUNCTIONS` name list, keeping the two
/// in sync.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct Builtin {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTINS: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"      => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "cbrt"      => { arity: Arity::Exact(1), func: builtin::cbrt },
    "nthRoot"   => { arity: Arity::OneOf(&[1, 2]), func: sqrt::nth_root },
    "hypot"     => { arity: Arity::AtLeast(1), func: sqrt::hypot },
    "pow"       => { arity: Arity::Exact(2), func: sqrt::pow },
    "abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "sign"      => { arity: Arity::Exact(1), func: builtin::sign },
    "exp"       => { arity: Arity::Exact(1), func: builtin::exp },
    "ln"        => { arity: Arity::Exact(1), func: log::ln },
    "log"       => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log10"     => { arity: Arity::Exact(1), func: log::log10 },
    "log2"      => { arity: Arity::Exact(1), func: log::log2 },
    "sin"       => { arity: Arity::Exact(1), func: trig::sin },
    "cos"       => { arity: Arity::Exact(1), func: trig::cos },
    "tan"       => { arity: Arity::Exact(1), func: trig::tan },
    "asin"      => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"      => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"      => { arity: Arity::Exact(1), func: builtin::atan },
    "atan2"     => { arity: Arity::Exact(2), func: trig::atan2 },
    "sinh"      => { arity: Arity::Exact(1), func: builtin::sinh },
    "cosh"      => { arity: Arity::Exact(1), func: builtin::cosh },
    "tanh"      => { arity: Arity::Exact(1), func: builtin::tanh },
    "floor"     => { arity: Arity::Exact(1), func: |args, line| rounding::unary_round("floor", args, line) },
    "ceil"      => { arity: Arity::Exact(1), func: |args, line| rounding::unary_round("ceil", args, line) },
    "fix"       => { arity: Arity::Exact(1), func: |args, line| rounding::unary_round("fix", args, line) },
    "round"     => { arity: Arity::OneOf(&[1, 2]), func: rounding::round },
    "mod"       => { arity: Arity::Exact(2), func: rounding::modulus },
    "min"       => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("min", args, line) },
    "max"       => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("max", args, line) },
    "factorial" => { arity: Arity::Exact(1), func: builtin::factorial },
}

impl Arity {
    fn admits(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::OneOf(counts) => counts.contains(&count),
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl Context<'_> {
    /// Calls the builtin `name` with already evaluated arguments.
    ///
    /// Unknown names fail with `UndefinedFunction` and a count the builtin
    /// does not accept with `ArgumentCountMismatch`. Names are
    /// case-sensitive, so `nthRoot` exists and `nthroot` does not.
    ///
    /// # Example
    /// ```
    /// use numtap::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_function("sqrt", &[Value::Number(16.0)], 1).unwrap();
    /// assert_eq!(result, Value::Number(4.0));
    ///
    /// assert!(Context::eval_function("sqrt", &[], 1).is_err());
    /// assert!(Context::eval_function("frobnicate", &[], 1).is_err());
    /// ```
    pub fn eval_function(name: &str, arg_vals: &[Value], line: usize) -> EvalResult<Value> {
        let Some(builtin) = BUILTINS.iter().find(|b| b.name == name) else {
            return Err(RuntimeError::UndefinedFunction { name: name.to_string(),
                                                         line });
        };

        if !builtin.arity.admits(arg_vals.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             line });
        }

        trace!(name, arguments = arg_vals.len(), "call builtin");
        (builtin.func)(arg_vals, line)
    }
}
