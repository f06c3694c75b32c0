/// Core evaluation logic.
///
/// Holds the evaluation [`core::Context`], the expression dispatcher and
/// statement execution.
pub mod core;

/// Arithmetic operator evaluation.
///
/// Implements the variadic `+` and `*` and the binary `-`, `/` and `mod`.
pub mod arithmetic;

/// Comparison operator evaluation for `>`, `<` and `=`.
pub mod comparison;

/// Logical operator evaluation for `and`, `or` and `not`.
pub mod logic;

/// Function call evaluation.
///
/// Resolves the callee, checks arity and evaluates the body under a
/// parameter frame that shadows the global environment.
pub mod function;

/// `print-num` and `print-bool`.
pub mod print;

/// Helpers shared by the evaluator modules, such as variable lookup and
/// conditional evaluation.
pub mod utils;
