/// Failures raised while evaluating a parsed statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// `name` is not a variable, a constant or a unit.
    #[error("Error on line {line}: Undefined symbol {name}")]
    UndefinedSymbol { name: String, line: usize },

    #[error("Error on line {line}: Undefined function {name}")]
    UndefinedFunction { name: String, line: usize },

    /// A builtin was called with too few or too many arguments.
    #[error("Error on line {line}: Wrong number of arguments in function {name}")]
    ArgumentCountMismatch { name: String, line: usize },

    /// Operands of the wrong kind, e.g. adding a boolean to a number.
    #[error("Error on line {line}: Type error: {details}")]
    TypeError { details: String, line: usize },

    #[error("Error on line {line}: Expected number")]
    ExpectedNumber { line: usize },

    /// Adding, comparing or converting quantities of different dimensions.
    #[error("Error on line {line}: Units {from} and {to} do not match")]
    IncompatibleUnits {
        from: String,
        to:   String,
        line: usize,
    },

    /// An assignment whose value is NaN. Nothing is stored.
    #[error("Error on line {line}: Cannot assign NaN to {name}")]
    NotANumber { name: String, line: usize },

    /// An assignment whose value is infinite. Nothing is stored.
    #[error("Error on line {line}: Cannot assign Infinity to {name}")]
    InfiniteValue { name: String, line: usize },

    #[error("Error on line {line}: Unit \"{name}\" not found")]
    UnknownUnit { name: String, line: usize },
}
