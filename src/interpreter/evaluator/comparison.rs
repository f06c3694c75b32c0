use std::io::Write;

use crate::{
    ast::NumOperator,
    interpreter::{evaluator::core::Context, value::Value},
};

impl<W: Write> Context<W> {
    /// Evaluates a comparison of two integers.
    ///
    /// Only called from [`Context::eval_num_op`] for `>`, `<` and `=`.
    pub(crate) fn eval_comparison(op: NumOperator, left: i64, right: i64) -> Value {
        Value::from(match op {
                        NumOperator::Greater => left > right,
                        NumOperator::Smaller => left < right,
                        NumOperator::Equal => left == right,
                        _ => unreachable!("eval_comparison used with non comparison operator"),
                    })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ctx = Context<Vec<u8>>;

    #[test]
    fn compares_integers() {
        assert_eq!(Ctx::eval_comparison(NumOperator::Greater, 3, 2), Value::Boolean(true));
        assert_eq!(Ctx::eval_comparison(NumOperator::Smaller, 3, 2), Value::Boolean(false));
        assert_eq!(Ctx::eval_comparison(NumOperator::Equal, -4, -4), Value::Boolean(true));
        assert_eq!(Ctx::eval_comparison(NumOperator::Equal, 1, 2), Value::Boolean(false));
    }
}
