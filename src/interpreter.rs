/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable and function
/// bindings, and writes the output of print statements.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Binds function parameters in a frame that shadows the globals.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// corresponding to a number, boolean, identifier, keyword, operator or
/// parenthesis. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Reports and skips characters that do not start any token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer with
/// recursive descent and constructs the statements of a program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces the operand count of every operator form.
/// - Reports the offending token on a syntax error.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are either integers or booleans. The module provides checked
/// conversions used by every operator that requires one or the other.
pub mod value;
