use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, check_nesting, parse_expression},
            utils::{parse_comma_separated, unexpected},
        },
    },
};

/// Parses prefix signs in front of a power.
///
/// `-` negates and `+` is dropped. Signs bind looser than `^`, so `-2^2` is
/// `-(2^2)`, and they nest: `--3` is `3`.
///
/// ```text
///     unary := ("-" | "+") unary | power
/// ```
///
/// Every sign, exponent and parenthesis passes through here one level
/// deeper, so this is where the nesting limit is enforced.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_nesting(tokens, depth)?;

    match tokens.peek() {
        Some((Token::Minus, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_unary(tokens, depth + 1)?;
            Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                               expr: Box::new(operand),
                               line })
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_unary(tokens, depth + 1)
        },
        _ => parse_power(tokens, depth),
    }
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `^`
/// right-associative (`2^3^2` is `2^9`) and allows `2^-1`.
///
/// Grammar: `power := postfix ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix(tokens, depth)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line:  *line, });
    }

    Ok(base)
}

/// Parses factorials applied to a primary expression.
///
/// Each `!` wraps the node in another `UnaryOperator::Factorial`, so `3!!`
/// is `(3!)!`.
///
/// Grammar: `postfix := primary "!"*`
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens, depth)?;
    while let Some((Token::Bang, line)) = tokens.peek() {
        tokens.next();
        node = Expr::UnaryOp { op:   UnaryOperator::Factorial,
                               expr: Box::new(node),
                               line: *line, };
    }
    Ok(node)
}

/// Parses an operand: a literal, a symbol, a call or a parenthesized
/// expression.
///
/// ```text
///     primary := NUMBER | BOOL
///              | IDENT ( "(" arguments? ")" )?
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: (*n).into(),
                                                             line:  *line, }),
        Some((Token::Bool(b), line)) => Ok(Expr::Literal { value: (*b).into(),
                                                           line:  *line, }),
        Some((Token::LParen, line)) => parse_grouping(tokens, *line, depth),
        Some((Token::Identifier(name), line)) => {
            parse_identifier_or_function(tokens, name.clone(), *line, depth)
        },
        Some((tok, line)) => Err(unexpected(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Finishes `( expression )` once the `(` at `line` has been consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// An identifier directly followed by `(` starts a call. Otherwise it is a
/// symbol, resolved only at evaluation time.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: String,
                                       line: usize,
                                       depth: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.next_if(|(tok, _)| *tok == Token::LParen).is_some() {
        let arguments = parse_comma_separated(tokens,
                                              |tokens| parse_expression(tokens, depth + 1),
                                              &Token::RParen,
                                              line)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name, line })
}
