/// Entry points for parsing programs, statements and expressions.
///
/// Implements the top of the grammar: a program is one or more statements,
/// and a statement is an expression, a print statement or a definition.
pub mod core;

/// Function expressions and calls.
///
/// Parses `(fun (params...) body)` and both call shapes: applying an inline
/// function expression and applying a function bound by name.
pub mod function;

/// Operator forms.
///
/// Parses the arithmetic, comparison and logical operators together with the
/// `if` expression, enforcing the operand count of each form.
pub mod operation;

/// Shared token-level helpers used by the other parser modules.
pub mod utils;
