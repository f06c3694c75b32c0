use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Bindings, Context, EvalResult},
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. The parameter bindings of the current function call.
    /// 2. The global variables.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the name is bound in neither.
    ///
    /// # Example
    /// ```
    /// use minilisp::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// ctx.define_variable("x", Value::Number(10));
    ///
    /// assert_eq!(ctx.eval_variable("x", 1, None).unwrap(), Value::Number(10));
    /// assert!(ctx.eval_variable("y", 1, None).is_err());
    /// ```
    pub fn eval_variable(&self,
                         name: &str,
                         line: usize,
                         bindings: Option<&Bindings>)
                         -> EvalResult<Value> {
        bindings.and_then(|b| b.get(name))
                .or_else(|| self.variables.get(name))
                .copied()
                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                               line })
    }

    /// Evaluates an `if` expression.
    ///
    /// The condition must evaluate to a boolean. Only the selected branch is
    /// evaluated; the other one is never touched, so errors it would raise do
    /// not surface.
    pub(crate) fn eval_if_expr(&mut self,
                               condition: &Expr,
                               then_branch: &Expr,
                               else_branch: &Expr,
                               line: usize,
                               bindings: Option<&Bindings>)
                               -> EvalResult<Value> {
        if self.eval(condition, bindings)?.as_bool(line)? {
            self.eval(then_branch, bindings)
        } else {
            self.eval(else_branch, bindings)
        }
    }

    /// Evaluates every operand left to right and converts each to an integer.
    pub(crate) fn eval_numbers(&mut self,
                               operands: &[Expr],
                               bindings: Option<&Bindings>)
                               -> EvalResult<Vec<i64>> {
        operands.iter()
                .map(|operand| self.eval(operand, bindings)?.as_number(operand.line_number()))
                .collect()
    }

    /// Evaluates every operand left to right and converts each to a boolean.
    pub(crate) fn eval_booleans(&mut self,
                                operands: &[Expr],
                                bindings: Option<&Bindings>)
                                -> EvalResult<Vec<bool>> {
        operands.iter()
                .map(|operand| self.eval(operand, bindings)?.as_bool(operand.line_number()))
                .collect()
    }
}

/// Destructures a binary operand list.
///
/// The parser only ever builds binary operations with two operands, but
/// hand-built trees are reported instead of panicking.
pub(crate) fn binary_operands<T: Copy>(operands: &[T], line: usize) -> EvalResult<(T, T)> {
    match operands {
        [left, right] => Ok((*left, *right)),
        _ => Err(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                       found: operands.len(),
                                                       line }),
    }
}
