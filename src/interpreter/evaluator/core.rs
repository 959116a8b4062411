use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    calculator::scope::Scope,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Relative tolerance used by `==`, `!=`, `<=` and `>=`.
pub const REL_TOLERANCE: f64 = 1e-12;
/// Absolute tolerance used by `==`, `!=`, `<=` and `>=`.
pub const ABS_TOLERANCE: f64 = 1e-15;

/// Stores the runtime evaluation context.
///
/// The context borrows the caller's [`Scope`] for the duration of one
/// statement. Expressions only read from it; assignments write to it.
///
/// ## Usage
///
/// ```
/// use numtap::{
///     ast::{Expr, Statement},
///     calculator::scope::Scope,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut scope = Scope::new();
/// let mut context = Context::new(&mut scope);
///
/// let statement = Statement::Assignment { name:  "x".to_string(),
///                                         value: Expr::Literal { value: 4.0.into(),
///                                                                line:  1, },
///                                         line:  1, };
/// assert_eq!(context.eval_statement(&statement).unwrap(), Value::Number(4.0));
/// assert_eq!(scope.get("x"), Some(&Value::Number(4.0)));
/// ```
pub struct Context<'a> {
    /// Variables visible to the expression.
    pub scope: &'a mut Scope,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context over the given scope.
    #[must_use]
    pub const fn new(scope: &'a mut Scope) -> Self {
        Self { scope }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, symbols, unary and binary operations and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments store the value in the scope, replacing any earlier
    /// binding, and yield the assigned value. A NaN or infinite value is
    /// refused with `NotANumber` or `InfiniteValue` and the scope keeps its
    /// previous binding. Expression statements yield their value and leave
    /// the scope untouched.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The value of the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                if let Some(magnitude) = value.magnitude() {
                    if magnitude.is_nan() {
                        return Err(RuntimeError::NotANumber { name: name.clone(),
                                                              line: *line, });
                    }
                    if magnitude.is_infinite() {
                        return Err(RuntimeError::InfiniteValue { name: name.clone(),
                                                                 line: *line, });
                    }
                }
                trace!(name = name.as_str(), %value, "assign");
                self.scope.set(name.clone(), value.clone());
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }
}
