use std::io::Write;

use crate::{
    ast::{Callee, Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Bindings, Context, EvalResult, MAX_CALL_DEPTH},
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a function call.
    ///
    /// The callee is resolved first: inline function expressions are used
    /// directly, names are looked up in the function table. The argument count
    /// must equal the parameter count. Arguments are then evaluated left to
    /// right in the caller's environment.
    ///
    /// # Errors
    /// - `UnknownFunction` if a named callee was never defined.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - Any error raised by the arguments or the body.
    pub(crate) fn eval_function_call(&mut self,
                                     callee: &Callee,
                                     arguments: &[Expr],
                                     line: usize,
                                     bindings: Option<&Bindings>)
                                     -> EvalResult<Value> {
        let named;
        let func = match callee {
            Callee::Lambda(def) => def,
            Callee::Named(name) => {
                named = self.functions
                            .get(name)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UnknownFunction { name: name.clone(),
                                                                           line })?;
                &*named
            },
        };

        if arguments.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: func.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg, bindings))
                                .collect::<EvalResult<Vec<_>>>()?;

        self.call_function(func, arg_vals, line)
    }

    /// Evaluates a function body with its parameters bound to `arg_vals`.
    ///
    /// The new frame contains only the parameters; lookups that miss it fall
    /// through to the global variables, never to the caller's parameters.
    fn call_function(&mut self,
                     func: &FunctionDef,
                     arg_vals: Vec<Value>,
                     line: usize)
                     -> EvalResult<Value> {
        if self.depth() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { line });
        }

        let frame = func.params
                        .iter()
                        .cloned()
                        .zip(arg_vals)
                        .collect::<Bindings>();

        self.enter_call();
        let result = self.eval(&func.body, Some(&frame));
        self.leave_call();

        result
    }
}
