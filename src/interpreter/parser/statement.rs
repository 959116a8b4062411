use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::unexpected,
        },
    },
};

/// Parses the tokens of one `;`-separated segment.
///
/// The whole slice must form a single statement: an empty slice is
/// `UnexpectedEndOfInput` and trailing tokens are reported by [`unexpected`].
///
/// # Example
/// ```
/// use numtap::{
///     ast::Statement,
///     interpreter::parser::{core::tokenize, statement::parse_segment},
/// };
///
/// let tokens = tokenize("x = 2 + 3").unwrap();
/// let statement = parse_segment(&tokens).unwrap();
/// assert!(matches!(statement, Statement::Assignment { ref name, .. } if name == "x"));
///
/// let tokens = tokenize("2 + 3 )").unwrap();
/// assert!(parse_segment(&tokens).is_err());
/// ```
pub fn parse_segment(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    if tokens.is_empty() {
        return Err(ParseError::UnexpectedEndOfInput { line: 1 });
    }

    let mut stream = tokens.iter().peekable();
    let statement = parse_statement(&mut stream)?;

    if let Some((leftover, line)) = stream.next() {
        return Err(unexpected(leftover, *line));
    }
    Ok(statement)
}

/// Parses an assignment if one starts here, otherwise an expression.
///
/// Expression statements record the line of their first token.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match parse_assignment(tokens)? {
        Some(assignment) => Ok(assignment),
        None => {
            let line = tokens.peek().map_or(1, |(_, line)| *line);
            let expr = parse_expression(tokens, 0)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Recognizes `identifier = expression`.
///
/// Peeks two tokens on a cloned iterator, so nothing is consumed when the
/// input is not an assignment and `Ok(None)` comes back. Rebinding a builtin
/// function or constant is an `IdentifierReserved` error.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (Some((Token::Identifier(name), _)), Some((Token::Equals, line))) = (lookahead.next(), lookahead.next())
    else {
        return Ok(None);
    };

    if is_reserved_identifier(name) {
        return Err(ParseError::IdentifierReserved { name: name.clone(),
                                                    line: *line, });
    }

    *tokens = lookahead;
    let value = parse_expression(tokens, 0)?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    line: *line }))
}
