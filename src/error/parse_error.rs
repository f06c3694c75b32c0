#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but something else was found.
    ExpectedClosingParen {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A function parameter was not a plain identifier.
    InvalidParameter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The source contained no statements at all.
    EmptyProgram,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Syntax error at '{token}'.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { found, line } => write!(f,
                                                                 "Error on line {line}: Expected closing parenthesis ')' but found '{found}'."),

            Self::InvalidParameter { line } => write!(f,
                                                      "Error on line {line}: Function parameters must be identifiers. Example: (fun (x y) (+ x y))"),

            Self::EmptyProgram => write!(f, "Error: The program contains no statements."),
        }
    }
}

impl std::error::Error for ParseError {}
