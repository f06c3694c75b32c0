use std::{
    collections::HashMap,
    io::Write,
    rc::Rc,
};

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Parameter bindings of the function call currently being evaluated.
pub type Bindings = HashMap<String, Value>;

/// Maximum nesting of function calls before evaluation is aborted.
pub const MAX_CALL_DEPTH: usize = 256;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of one session: the global
/// variables bound by `define`, the named functions, and the sink that
/// `print-num` and `print-bool` write to. Sessions never share state; each
/// `Context` is independent.
///
/// ## Usage
///
/// A `Context` is created once per program and reused for every statement,
/// so definitions made by earlier statements are visible to later ones.
///
/// ```
/// use minilisp::{
///     interpreter::{
///         evaluator::core::Context, lexer::tokenize, parser::core::parse_program, value::Value,
///     },
/// };
///
/// let (tokens, _) = tokenize("(define x 5) (print-num (* x 2))");
/// let program = parse_program(&tokens).unwrap();
///
/// let mut context = Context::with_output(Vec::new());
/// for statement in &program {
///     context.eval_statement(statement).unwrap();
/// }
///
/// assert_eq!(context.get_variable("x"), Some(Value::Number(5)));
/// assert_eq!(context.into_output(), b"10\n");
/// ```
pub struct Context<W: Write> {
    /// Global variables, mutated only by `define`.
    pub variables: HashMap<String, Value>,
    /// Named functions, bound by `(define name (fun ...))`.
    pub functions: HashMap<String, Rc<FunctionDef>>,
    output:        W,
    depth:         usize,
}

impl<W: Write> Context<W> {
    /// Creates a new evaluation context with no bindings that prints to
    /// `output`.
    pub fn with_output(output: W) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               output,
               depth: 0 }
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Binds `name` in the global environment, replacing any previous value.
    pub fn define_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the global value bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, numeric and
    /// logical operations, conditionals and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `bindings`: Parameter bindings when evaluating a function body. They
    ///   shadow the global variables.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating `expr` or one of its
    /// children; evaluation stops at the first error.
    pub fn eval(&mut self, expr: &Expr, bindings: Option<&Bindings>) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Bool { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line, bindings),
            Expr::NumOp { op, operands, line } => {
                self.eval_num_op(*op, operands, *line, bindings)
            },
            Expr::LogicOp { op, operands, line } => {
                self.eval_logic_op(*op, operands, *line, bindings)
            },
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           line, } => {
                self.eval_if_expr(condition, then_branch, else_branch, *line, bindings)
            },
            Expr::FunctionCall { callee,
                                 arguments,
                                 line, } => {
                self.eval_function_call(callee, arguments, *line, bindings)
            },
        }
    }

    /// Evaluates a single top-level statement.
    ///
    /// Definitions update the context, print statements write to the output
    /// sink, and expression statements yield their value.
    ///
    /// # Returns
    /// `Some(Value)` for expression statements, `None` otherwise.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr, None).map(Some),
            Statement::Define { name, value, .. } => {
                let value = self.eval(value, None)?;
                self.define_variable(name, value);
                Ok(None)
            },
            Statement::DefineFunction { name, def, .. } => {
                self.functions.insert(name.clone(), Rc::new(def.clone()));
                Ok(None)
            },
            Statement::Print { kind, value, line } => {
                self.eval_print(*kind, value, *line)?;
                Ok(None)
            },
        }
    }

    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter_call(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave_call(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
