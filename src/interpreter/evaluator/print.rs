use std::io::Write;

use crate::{
    ast::{Expr, PrintKind},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates `print-num` or `print-bool` and writes the value on its own
    /// line.
    ///
    /// `print-num` requires a number and `print-bool` a boolean; booleans are
    /// written as `#t` or `#f`. Nothing is written if evaluation fails.
    pub(crate) fn eval_print(&mut self,
                             kind: PrintKind,
                             value: &Expr,
                             line: usize)
                             -> EvalResult<()> {
        let value = self.eval(value, None)?;

        match kind {
            PrintKind::Num => {
                value.as_number(line)?;
            },
            PrintKind::Bool => {
                value.as_bool(line)?;
            },
        }

        writeln!(self.output(), "{value}")?;
        Ok(())
    }
}
