use std::iter::Peekable;

use crate::{
    ast::{Callee, Expr, FunctionDef},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_closing_paren, expect_token, parse_identifier, parse_until_closing_paren},
        },
    },
};

/// Parses a function expression.
///
/// Grammar: `fun_exp := "(" "fun" "(" exp+ ")" exp ")"`
///
/// Each parameter is parsed as an expression and must turn out to be a plain
/// identifier.
///
/// # Errors
/// - `UnexpectedToken` if `(`, `fun` or the parameter list is missing.
/// - `InvalidParameter` if a parameter is not an identifier.
pub fn parse_function_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LParen)?;
    expect_token(tokens, &Token::Fun)?;
    expect_token(tokens, &Token::LParen)?;

    let params = parse_until_closing_paren(tokens, true)?
        .into_iter()
        .map(|param| match param {
            Expr::Variable { name, .. } => Ok(name),
            other => Err(ParseError::InvalidParameter { line: other.line_number() }),
        })
        .collect::<ParseResult<Vec<_>>>()?;
    expect_closing_paren(tokens)?;

    let body = parse_expression(tokens)?;
    expect_closing_paren(tokens)?;

    Ok(FunctionDef { params,
                     body: Box::new(body),
                     line })
}

/// Parses the application of an inline function expression.
///
/// Grammar: `fun_call := fun_exp exp*`
///
/// The argument count is not checked here; a mismatch with the parameter
/// list is reported when the call is evaluated.
pub fn parse_lambda_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let def = parse_function_expression(tokens)?;
    let arguments = parse_until_closing_paren(tokens, false)?;

    Ok(Expr::FunctionCall { callee: Callee::Lambda(def),
                            arguments,
                            line })
}

/// Parses the application of a function bound with `define`.
///
/// Grammar: `named_call := ID exp*`
pub fn parse_named_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    let arguments = parse_until_closing_paren(tokens, false)?;

    Ok(Expr::FunctionCall { callee: Callee::Named(name),
                            arguments,
                            line })
}
