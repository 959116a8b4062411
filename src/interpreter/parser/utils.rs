use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Collects `item, item, ...` up to and including `closing`.
///
/// Call it just after the opening token. A `closing` right away yields an
/// empty list, so `max()` reaches the builtin with no arguments.
///
/// # Parameters
/// - `parse_item`: Parser for one element, usually `parse_expression`.
/// - `line`: Where the list was opened. Running out of input reports
///   `ExpectedClosingParen` on this line.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if tokens.next_if(|(tok, _)| tok == closing).is_some() {
        return Ok(Vec::new());
    }

    let mut items = vec![parse_item(tokens)?];
    loop {
        match tokens.next() {
            Some((Token::Comma, _)) => items.push(parse_item(tokens)?),
            Some((tok, _)) if tok == closing => return Ok(items),
            Some((tok, at)) => return Err(unexpected(tok, *at)),
            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }
}

/// Builds the error for a token that appeared where it does not belong.
///
/// Operators produce `Unexpected operator`, everything else
/// `Unexpected token`.
///
/// # Example
/// ```
/// use numtap::{error::ParseError, interpreter::{lexer::Token, parser::utils::unexpected}};
///
/// assert_eq!(unexpected(&Token::Star, 1),
///            ParseError::UnexpectedOperator { op:   "*".to_string(),
///                                             line: 1, });
/// ```
#[must_use]
pub fn unexpected(token: &Token, line: usize) -> ParseError {
    if token.is_operator() {
        ParseError::UnexpectedOperator { op: token.to_string(),
                                         line }
    } else {
        ParseError::UnexpectedToken { token: token.to_string(),
                                      line }
    }
}
