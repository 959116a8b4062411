/// Failures raised while turning source text into a [`Statement`].
///
/// Every message starts with `Error on line N:`, which the calculator strips
/// before classifying it.
///
/// [`Statement`]: crate::ast::Statement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An operator sat where an operand should be, as in `* 3` or `2 +`.
    #[error("Error on line {line}: Unexpected operator {op}")]
    UnexpectedOperator { op: String, line: usize },

    /// Any other misplaced token, for example a stray `)` or `,`.
    #[error("Error on line {line}: Unexpected token {token}")]
    UnexpectedToken { token: String, line: usize },

    #[error("Error on line {line}: Unexpected end of expression")]
    UnexpectedEndOfInput { line: usize },

    /// `(` or a call was opened and never closed.
    #[error("Error on line {line}: Parenthesis ) expected")]
    ExpectedClosingParen { line: usize },

    /// Text the lexer has no token for, such as `$` or `#`.
    #[error("Error on line {line}: Syntax error in part \"{slice}\"")]
    InvalidCharacter { slice: String, line: usize },

    /// Parentheses, signs or exponents nested past the parser's limit.
    #[error("Error on line {line}: Maximum nesting depth exceeded")]
    NestingTooDeep { line: usize },

    #[error("Error on line {line}: Expression is too long")]
    ExpressionTooLong { line: usize },

    /// Builtin function names and constants cannot be rebound.
    #[error("Error on line {line}: Cannot assign to reserved name {name}")]
    IdentifierReserved { name: String, line: usize },
}
