//! # minilisp
//!
//! minilisp is an interpreter for a small Lisp-like expression language
//! written in Rust. It tokenizes, parses and evaluates programs made of
//! integer arithmetic, boolean logic, conditionals, definitions and
//! functions, with `print-num` and `print-bool` as its only side effects.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Statement,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the operator
/// types that represent a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every error carries the source line it refers to and renders as a
/// human-readable diagnostic through `Display`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Options controlling how [`run`] executes a program.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the value of the last top-level expression statement once the
    /// program has finished.
    pub pipe_mode: bool,
    /// Stop at the first runtime error and return it, instead of reporting it
    /// and continuing with the next statement.
    pub strict:    bool,
}

/// Runs a complete program.
///
/// The source is tokenized and parsed as a whole before any statement is
/// executed. Then every statement is evaluated in order against one fresh
/// [`Context`], writing printed values to `out`.
///
/// Diagnostics are written to `err`:
/// - lexical errors are reported and the offending characters skipped;
/// - a parse error aborts the program before anything runs and is returned;
/// - a runtime error aborts its statement only, unless `options.strict` is
///   set, in which case it is returned.
///
/// # Errors
/// Returns the parse error, the first runtime error in strict mode, or any
/// I/O error raised while writing to `out` or `err`.
///
/// # Examples
/// ```
/// use minilisp::{RunOptions, run};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// run("(define y 10) (print-num (* y 2))", &mut out, &mut err, &RunOptions::default()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "20\n");
/// assert!(err.is_empty());
/// ```
pub fn run(source: &str,
           out: &mut dyn Write,
           err: &mut dyn Write,
           options: &RunOptions)
           -> Result<(), Box<dyn std::error::Error>> {
    let (tokens, lex_errors) = tokenize(source);
    for e in &lex_errors {
        writeln!(err, "{e}")?;
    }

    let program = parse_program(&tokens)?;

    let mut context = Context::with_output(&mut *out);
    let mut result = None;

    for statement in &program {
        match context.eval_statement(statement) {
            Ok(value) => {
                if matches!(statement, Statement::Expression { .. }) && value.is_some() {
                    result = value;
                }
            },
            Err(e) if options.strict => return Err(Box::new(e)),
            Err(e) => writeln!(err, "{e}")?,
        }
    }

    let out = context.into_output();
    if options.pipe_mode
       && let Some(v) = result
    {
        writeln!(out, "{v}")?;
    }
    out.flush()?;

    Ok(())
}

/// Runs a program against standard output and standard error.
///
/// Execution stops at the first runtime error, which is returned.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minilisp::get_result;
///
/// // Prints `3`.
/// assert!(get_result("(print-num (+ 1 2))", false).is_ok());
///
/// // `x` is not defined.
/// assert!(get_result("(print-num x)", false).is_err());
/// ```
pub fn get_result(source: &str, pipe_mode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = RunOptions { pipe_mode,
                               strict: true };

    run(source, &mut io::stdout().lock(), &mut io::stderr().lock(), &options)
}
