use std::iter::Peekable;

use crate::{
    ast::{Expr, LogicOperator, NumOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{parse_exactly, parse_until_closing_paren},
        },
    },
};

/// Maps a token to its arithmetic or comparison operator.
const fn token_to_num_operator(token: &Token) -> Option<NumOperator> {
    match token {
        Token::Plus => Some(NumOperator::Add),
        Token::Minus => Some(NumOperator::Sub),
        Token::Multiply => Some(NumOperator::Mul),
        Token::Divide => Some(NumOperator::Div),
        Token::Modulus => Some(NumOperator::Mod),
        Token::Greater => Some(NumOperator::Greater),
        Token::Smaller => Some(NumOperator::Smaller),
        Token::Equal => Some(NumOperator::Equal),
        _ => None,
    }
}

/// Maps a token to its logical operator.
const fn token_to_logic_operator(token: &Token) -> Option<LogicOperator> {
    match token {
        Token::And => Some(LogicOperator::And),
        Token::Or => Some(LogicOperator::Or),
        Token::Not => Some(LogicOperator::Not),
        _ => None,
    }
}

/// Parses an arithmetic or comparison operation.
///
/// Grammar:
/// ```text
/// num_op := "+" exp+ | "*" exp+
///         | ("-" | "/" | "mod" | ">" | "<" | "=") exp exp
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the operator.
/// - `line`: Line of the opening parenthesis.
///
/// # Returns
/// An `Expr::NumOp`; the closing parenthesis is left in the stream.
pub fn parse_num_op<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.next() {
        Some((tok, tok_line)) => {
            token_to_num_operator(tok).ok_or_else(|| {
                                      ParseError::UnexpectedToken { token: tok.to_string(),
                                                                    line:  *tok_line, }
                                  })?
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let operands = if op.is_variadic() {
        parse_until_closing_paren(tokens, true)?
    } else {
        parse_exactly(tokens, 2)?
    };

    Ok(Expr::NumOp { op, operands, line })
}

/// Parses a logical operation.
///
/// Grammar: `logical_op := "and" exp+ | "or" exp+ | "not" exp`
pub fn parse_logic_op<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.next() {
        Some((tok, tok_line)) => {
            token_to_logic_operator(tok).ok_or_else(|| {
                                        ParseError::UnexpectedToken { token: tok.to_string(),
                                                                      line:  *tok_line, }
                                    })?
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let operands = match op {
        LogicOperator::Not => parse_exactly(tokens, 1)?,
        LogicOperator::And | LogicOperator::Or => parse_until_closing_paren(tokens, true)?,
    };

    Ok(Expr::LogicOp { op, operands, line })
}

/// Parses the body of an `if` expression.
///
/// Grammar: `if_exp := "if" exp exp exp`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line of the opening parenthesis.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut parts = parse_exactly(tokens, 3)?.into_iter();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(condition), Some(then_branch), Some(else_branch)) => {
            Ok(Expr::IfExpr { condition: Box::new(condition),
                              then_branch: Box::new(then_branch),
                              else_branch: Box::new(else_branch),
                              line })
        },
        _ => Err(ParseError::UnexpectedEndOfInput),
    }
}
