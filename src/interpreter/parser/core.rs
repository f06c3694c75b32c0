use std::iter::Peekable;

use crate::{
    ast::{Expr, PrintKind, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            function::{parse_function_expression, parse_lambda_call, parse_named_call},
            operation::{parse_if, parse_logic_op, parse_num_op},
            utils::{expect_closing_paren, parse_identifier, starts_function_expression},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// Grammar: `program := statement+`
///
/// The whole token sequence must be consumed; any token left after the last
/// complete statement starts another statement and is parsed as such.
///
/// # Errors
/// Returns [`ParseError::EmptyProgram`] for a program without tokens, or the
/// first error raised by [`parse_statement`].
///
/// # Example
/// ```
/// use minilisp::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let (tokens, _) = tokenize("(define y 10) (print-num (* y 2))");
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::EmptyProgram);
    }

    let mut statements = Vec::new();
    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement, `(print-num e)` or `(print-bool e)`.
/// - a definition, `(define name e)`.
/// - an expression used as a statement.
///
/// Print statements and definitions are recognized by looking two tokens
/// ahead; everything else is parsed as an expression.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_print_statement(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_define_statement(tokens)? {
        return Ok(statement);
    }

    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses `(print-num e)` or `(print-bool e)`.
///
/// # Returns
/// - `Ok(Some(statement))` if a print statement was parsed,
/// - `Ok(None)` if the next tokens do not start one.
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (line, kind) = match (lookahead.next(), lookahead.next()) {
        (Some((Token::LParen, line)), Some((Token::PrintNum, _))) => (*line, PrintKind::Num),
        (Some((Token::LParen, line)), Some((Token::PrintBool, _))) => (*line, PrintKind::Bool),
        _ => return Ok(None),
    };
    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    expect_closing_paren(tokens)?;

    Ok(Some(Statement::Print { kind, value, line }))
}

/// Parses `(define name e)`.
///
/// When `e` is a function expression the result is a
/// [`Statement::DefineFunction`], otherwise a [`Statement::Define`].
fn parse_define_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let line = match (lookahead.next(), lookahead.next()) {
        (Some((Token::LParen, line)), Some((Token::Define, _))) => *line,
        _ => return Ok(None),
    };
    tokens.next();
    tokens.next();

    let name = parse_identifier(tokens)?;

    let statement = if starts_function_expression(tokens) {
        let def = parse_function_expression(tokens)?;
        Statement::DefineFunction { name, def, line }
    } else {
        let value = parse_expression(tokens)?;
        Statement::Define { name, value, line }
    };
    expect_closing_paren(tokens)?;

    Ok(Some(statement))
}

/// Parses a full expression.
///
/// Grammar:
/// ```text
/// expression := NUMBER | BOOL | ID
///             | "(" num_op ")" | "(" logical_op ")"
///             | "(" if_exp ")" | "(" fun_call ")"
/// ```
///
/// # Errors
/// Returns `UnexpectedToken` for any token that cannot start an expression,
/// including keywords that are only valid at statement level.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::Number { value: *value,
                                                                line:  *line, }),
        Some((Token::Bool(value), line)) => Ok(Expr::Bool { value: *value,
                                                            line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_parenthesized(tokens, *line)?;
            expect_closing_paren(tokens)?;
            Ok(expr)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Dispatches on the token following an opening parenthesis. The closing
/// parenthesis is left for the caller.
fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Plus
              | Token::Minus
              | Token::Multiply
              | Token::Divide
              | Token::Modulus
              | Token::Greater
              | Token::Smaller
              | Token::Equal,
              _)) => parse_num_op(tokens, line),
        Some((Token::And | Token::Or | Token::Not, _)) => parse_logic_op(tokens, line),
        Some((Token::If, _)) => {
            tokens.next();
            parse_if(tokens, line)
        },
        Some((Token::LParen, _)) => parse_lambda_call(tokens, line),
        Some((Token::Identifier(_), _)) => parse_named_call(tokens, line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
