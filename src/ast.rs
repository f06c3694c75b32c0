/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children and is only built once all of them have been
/// parsed. Each variant records the line of the token that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal, `#t` or `#f`.
    Bool {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic or comparison operation such as `(+ 1 2 3)`.
    NumOp {
        /// The operator.
        op:       NumOperator,
        /// Operands in source order.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A logical operation such as `(and #t #f)`.
    LogicOp {
        /// The operator.
        op:       LogicOperator,
        /// Operands in source order.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Conditional expression `(if cond then else)`.
    IfExpr {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is `#t`.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is `#f`.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Function application, either of an inline `fun` or a named function.
    FunctionCall {
        /// The function being applied.
        callee:    Callee,
        /// Arguments in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use minilisp::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Bool { line, .. }
            | Self::Variable { line, .. }
            | Self::NumOp { line, .. }
            | Self::LogicOp { line, .. }
            | Self::IfExpr { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// A function expression, `(fun (params...) body)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The parameter names in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Box<Expr>,
    /// Line number in the source code.
    pub line:   usize,
}

/// The function applied by a [`Expr::FunctionCall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// An inline function expression, `((fun (x) (* x x)) 3)`.
    Lambda(FunctionDef),
    /// A function previously bound with `define`, `(square 3)`.
    Named(String),
}

/// Selects what a print statement expects and emits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrintKind {
    /// `print-num`
    Num,
    /// `print-bool`
    Bool,
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `(define name expr)`: binds a value in the global environment.
    Define {
        /// The name of the variable.
        name:  String,
        /// The bound expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `(define name (fun ...))`: binds a named function.
    DefineFunction {
        /// The name of the function.
        name: String,
        /// The function definition.
        def:  FunctionDef,
        /// Line number in the source code.
        line: usize,
    },
    /// `(print-num expr)` or `(print-bool expr)`.
    Print {
        /// Which print form was used.
        kind:  PrintKind,
        /// The expression whose value is printed.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Arithmetic and comparison operators.
///
/// `+` and `*` take one or more operands; all others are binary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Floor modulus (`mod`)
    Mod,
    /// Greater than (`>`)
    Greater,
    /// Smaller than (`<`)
    Smaller,
    /// Equal to (`=`)
    Equal,
}

impl NumOperator {
    /// Returns `true` for operators accepting any positive number of operands.
    #[must_use]
    pub const fn is_variadic(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }
}

/// Logical operators. `and` and `or` are variadic; `not` is unary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Logical not (`not`)
    Not,
}
