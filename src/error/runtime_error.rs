use crate::interpreter::value::ValueType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A value had a different type than the operation requires.
    TypeError {
        /// The type the operation requires.
        expected: ValueType,
        /// The type that was actually supplied.
        found:    ValueType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The number of arguments does not match the number of parameters.
    ArgumentCountMismatch {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division or modulus by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested too deeply.
    RecursionLimit {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing printed output failed.
    Output {
        /// The underlying I/O error message.
        message: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { expected,
                              found,
                              line, } => write!(f,
                                                "Error on line {line}: Type Error: Expect '{expected}' but got '{found}'."),
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Argument count mismatch. Expected {expected}, but found {found}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::RecursionLimit { line } => {
                write!(f, "Error on line {line}: Function calls nested too deeply.")
            },
            Self::Output { message } => write!(f, "Error: Failed to write output: {message}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Output { message: e.to_string() }
    }
}
