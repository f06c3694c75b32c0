use std::io::Write;

use crate::{
    ast::{Expr, LogicOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Bindings, Context, EvalResult},
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a logical operation.
    ///
    /// Every operand is evaluated before the result is folded, so `and` and
    /// `or` do not short-circuit. All operands must be booleans.
    ///
    /// # Errors
    /// `TypeError` if an operand is a number, e.g. `(not 1)`.
    pub(crate) fn eval_logic_op(&mut self,
                                op: LogicOperator,
                                operands: &[Expr],
                                line: usize,
                                bindings: Option<&Bindings>)
                                -> EvalResult<Value> {
        let values = self.eval_booleans(operands, bindings)?;

        match op {
            LogicOperator::And => Ok(Value::from(values.iter().all(|&b| b))),
            LogicOperator::Or => Ok(Value::from(values.iter().any(|&b| b))),
            LogicOperator::Not => match values.as_slice() {
                [value] => Ok(Value::from(!value)),
                _ => Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                               found: values.len(),
                                                               line }),
            },
        }
    }
}
