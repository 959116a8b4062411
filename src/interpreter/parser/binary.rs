use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Left-associative infix levels, ordered from loosest to tightest.
///
/// `^` is not listed here: it is right-associative and lives with the unary
/// operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `==`, `!=`, `<`, `>`, `<=`, `>=`
    Comparison,
    /// `+`, `-`
    Sum,
    /// `*`, `/`, `%`
    Product,
    /// Juxtaposed operands such as `2 km` or `3(x + 1)`.
    Implicit,
}

impl Tier {
    const fn next(self) -> Option<Self> {
        match self {
            Self::Comparison => Some(Self::Sum),
            Self::Sum => Some(Self::Product),
            Self::Product => Some(Self::Implicit),
            Self::Implicit => None,
        }
    }
}

/// Looks up the operator an infix token stands for and the tier it binds at.
///
/// # Example
/// ```
/// use numtap::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::Token,
///         parser::binary::{Tier, infix},
///     },
/// };
///
/// assert_eq!(infix(&Token::Plus), Some((BinaryOperator::Add, Tier::Sum)));
/// assert_eq!(infix(&Token::BangEqual),
///            Some((BinaryOperator::NotEqual, Tier::Comparison)));
/// assert_eq!(infix(&Token::Caret), None);
/// assert_eq!(infix(&Token::Comma), None);
/// ```
#[must_use]
pub const fn infix(token: &Token) -> Option<(BinaryOperator, Tier)> {
    use BinaryOperator as Op;

    let pair = match token {
        Token::EqualEqual => (Op::Equal, Tier::Comparison),
        Token::BangEqual => (Op::NotEqual, Tier::Comparison),
        Token::Less => (Op::Less, Tier::Comparison),
        Token::Greater => (Op::Greater, Tier::Comparison),
        Token::LessEqual => (Op::LessEqual, Tier::Comparison),
        Token::GreaterEqual => (Op::GreaterEqual, Tier::Comparison),
        Token::Plus => (Op::Add, Tier::Sum),
        Token::Minus => (Op::Sub, Tier::Sum),
        Token::Star => (Op::Mul, Tier::Product),
        Token::Slash => (Op::Div, Tier::Product),
        Token::Percent => (Op::Mod, Tier::Product),
        _ => return None,
    };
    Some(pair)
}

/// Whether `token` can begin an operand that multiplies its left neighbour
/// by juxtaposition.
const fn starts_operand(token: &Token) -> bool {
    matches!(token, Token::Number(_) | Token::Identifier(_) | Token::LParen)
}

/// Parses every infix operator from `tier` upward.
///
/// Each tier folds its operands to the left, so `8 - 3 - 1` is `(8 - 3) - 1`
/// and `1 < 2 == true` compares `1 < 2` with `true`. Implicit multiplication
/// binds tighter than `*` and `/`: `1 / 2 km` is `1 / (2 km)`.
///
/// ```text
///     comparison := sum (("==" | "!=" | "<" | ">" | "<=" | ">=") sum)*
///     sum        := product (("+" | "-") product)*
///     product    := implicit (("*" | "/" | "%") implicit)*
///     implicit   := unary unary*
/// ```
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs with one token of lookahead.
/// - `tier`: The loosest level this call may consume.
/// - `depth`: Nesting level, passed down to the operands.
///
/// # Returns
/// The folded expression, or the single operand when no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>, tier: Tier, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(inner) = tier.next() else {
        return parse_juxtaposed(tokens, depth);
    };

    let mut node = parse_binary(tokens, inner, depth)?;

    while let Some((token, line)) = tokens.peek().copied()
          && let Some((op, found)) = infix(token)
          && found == tier
    {
        tokens.next();
        let rhs = parse_binary(tokens, inner, depth)?;
        node = fold(node, op, rhs, *line);
    }

    Ok(node)
}

fn parse_juxtaposed<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_unary(tokens, depth)?;

    while let Some((token, line)) = tokens.peek().copied()
          && starts_operand(token)
    {
        let rhs = parse_unary(tokens, depth)?;
        node = fold(node, BinaryOperator::Mul, rhs, *line);
    }

    Ok(node)
}

fn fold(lhs: Expr, op: BinaryOperator, rhs: Expr, line: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(lhs),
                     op,
                     right: Box::new(rhs),
                     line }
}
