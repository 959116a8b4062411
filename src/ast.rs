use std::fmt;

/// A constant written directly in the source.
///
/// Units are not literals: `2 km` parses as the implicit product of the
/// number `2` and the symbol `km`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// Any numeric literal, integral ones included.
    Number(f64),
    /// `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Expression tree produced by the parser.
///
/// Every node keeps the line it started on so runtime errors can point back
/// into the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: LiteralValue,
        line:  usize,
    },
    /// A bare name. It resolves, in order, to a variable, a constant such as
    /// `pi`, or a unit such as `km`.
    Variable {
        name: String,
        line: usize,
    },
    UnaryOp {
        op:   UnaryOperator,
        expr: Box<Self>,
        line: usize,
    },
    BinaryOp {
        left:  Box<Self>,
        op:    BinaryOperator,
        right: Box<Self>,
        line:  usize,
    },
    /// `name(arg, ...)`, dispatched to a builtin.
    FunctionCall {
        name:      String,
        arguments: Vec<Self>,
        line:      usize,
    },
}

/// One `;`-free piece of input after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A computation whose value is the result.
    Expression { expr: Expr, line: usize },
    /// `name = value`, binding into the scope.
    Assignment {
        name:  String,
        value: Expr,
        line:  usize,
    },
}

/// Infix operators, arithmetic first and comparisons after.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    /// Written `*`, and also what juxtaposition such as `2 km` produces.
    Mul,
    Div,
    /// Right-associative `^`.
    Pow,
    /// Floored remainder, taking the sign of the divisor.
    Mod,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl BinaryOperator {
    /// The operator as it is written in source text.
    ///
    /// ```
    /// use numtap::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.symbol(), "^");
    /// assert_eq!(BinaryOperator::NotEqual.to_string(), "!=");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `-`.
    Negate,
    /// Postfix `!`.
    Factorial,
}
