use std::io::Write;

use crate::{
    ast::{Expr, NumOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Bindings, Context, EvalResult},
            utils::binary_operands,
        },
        value::Value,
    },
    util::num::{floor_div, floor_mod},
};

impl<W: Write> Context<W> {
    /// Evaluates an arithmetic or comparison operation.
    ///
    /// All operands are evaluated left to right and must be numbers. Addition
    /// and multiplication fold over every operand; the remaining operators
    /// take exactly two. Comparisons are delegated to
    /// [`Context::eval_comparison`].
    ///
    /// # Errors
    /// - `TypeError` if an operand is not a number.
    /// - `DivisionByZero` for `/` or `mod` with a zero divisor.
    /// - `Overflow` if the result does not fit into 64 bits.
    pub(crate) fn eval_num_op(&mut self,
                              op: NumOperator,
                              operands: &[Expr],
                              line: usize,
                              bindings: Option<&Bindings>)
                              -> EvalResult<Value> {
        let values = self.eval_numbers(operands, bindings)?;

        match op {
            NumOperator::Add => values.iter()
                                      .try_fold(0_i64, |acc, &v| acc.checked_add(v))
                                      .map(Value::from)
                                      .ok_or(RuntimeError::Overflow { line }),
            NumOperator::Mul => values.iter()
                                      .try_fold(1_i64, |acc, &v| acc.checked_mul(v))
                                      .map(Value::from)
                                      .ok_or(RuntimeError::Overflow { line }),
            NumOperator::Sub => {
                let (left, right) = binary_operands(&values, line)?;
                left.checked_sub(right)
                    .map(Value::from)
                    .ok_or(RuntimeError::Overflow { line })
            },
            NumOperator::Div => {
                let (left, right) = binary_operands(&values, line)?;
                floor_div(left, right, line).map(Value::from)
            },
            NumOperator::Mod => {
                let (left, right) = binary_operands(&values, line)?;
                floor_mod(left, right, line).map(Value::from)
            },
            NumOperator::Greater | NumOperator::Smaller | NumOperator::Equal => {
                let (left, right) = binary_operands(&values, line)?;
                Ok(Self::eval_comparison(op, left, right))
            },
        }
    }
}
