/// Lexical errors.
///
/// Raised for characters that do not start any token. Lexical errors are
/// never fatal: the offending character is skipped and lexing continues.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as unexpected tokens, missing parentheses, or input that ends
/// in the middle of a statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// type mismatches, unknown names, arity mismatches, and arithmetic failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
