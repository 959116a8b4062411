use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::binary::{Tier, parse_binary},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, call arguments, prefix signs and
/// exponents the parser accepts.
pub const MAX_NESTING: usize = 128;

/// Most tokens a single segment may hold. Expression trees are at most this
/// deep, which keeps evaluation and dropping them within the stack.
pub const MAX_TOKENS: usize = 1024;

/// Parses one expression, starting from the loosest level (comparisons).
///
/// Stops at the first token that cannot continue it, leaving that token in
/// `tokens` for the caller. `depth` is the nesting level of this expression,
/// `0` for a whole segment.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary(tokens, Tier::Comparison, depth)
}

/// Fails with `NestingTooDeep` once `depth` passes [`MAX_NESTING`].
pub(in crate::interpreter::parser) fn check_nesting<'a, I>(tokens: &mut Peekable<I>,
                                                             depth: usize)
                                                             -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth <= MAX_NESTING {
        return Ok(());
    }
    let line = tokens.peek().map_or(1, |(_, line)| *line);
    Err(ParseError::NestingTooDeep { line })
}

/// Turns source text into `(Token, line)` pairs.
///
/// Lines are counted from 1. Characters the lexer does not recognize are
/// reported as `ParseError::InvalidCharacter`, and input with more than
/// [`MAX_TOKENS`] tokens as `ParseError::ExpressionTooLong`.
///
/// # Example
/// ```
/// use numtap::interpreter::{lexer::Token, parser::core::tokenize};
///
/// let tokens = tokenize("2 km").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 1), (Token::Identifier("km".to_string()), 1)]);
///
/// assert!(tokenize("5 $ 3").is_err());
/// assert!(tokenize(&"1+".repeat(600)).is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(_) if tokens.len() == MAX_TOKENS => {
                return Err(ParseError::ExpressionTooLong { line: lexer.extras.line });
            },
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                return Err(ParseError::InvalidCharacter { slice: lexer.slice().to_string(),
                                                          line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
