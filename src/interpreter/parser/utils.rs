use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Consumes a closing parenthesis.
///
/// # Errors
/// Returns `ExpectedClosingParen` naming the token found instead, or
/// `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((tok, line)) => Err(ParseError::ExpectedClosingParen { found: tok.to_string(),
                                                                    line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes one token that must equal `expected`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name.
///
/// Keywords are separate tokens, so a keyword in identifier position is
/// reported as an unexpected token.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses exactly `count` expressions.
pub(in crate::interpreter::parser) fn parse_exactly<'a, I>(tokens: &mut Peekable<I>,
                                                           count: usize)
                                                           -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    (0..count).map(|_| parse_expression(tokens)).collect()
}

/// Parses expressions up to, but not including, the next `)`.
///
/// With `at_least_one` set, an immediate `)` is rejected as an unexpected
/// token, which is how `(+)` or `(and)` fail.
pub(in crate::interpreter::parser) fn parse_until_closing_paren<'a, I>(
    tokens: &mut Peekable<I>,
    at_least_one: bool)
    -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if at_least_one {
        items.push(parse_expression(tokens)?);
    }
    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => break,
            Some(_) => items.push(parse_expression(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
    Ok(items)
}

/// Returns `true` if the next two tokens are `(` `fun`.
pub(in crate::interpreter::parser) fn starts_function_expression<'a, I>(tokens: &Peekable<I>)
                                                                        -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    matches!((lookahead.next(), lookahead.next()),
             (Some((Token::LParen, _)), Some((Token::Fun, _))))
}
