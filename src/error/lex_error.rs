#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the diagnostics produced while tokenizing.
pub enum LexError {
    /// A character that does not begin any token.
    IllegalCharacter {
        /// The skipped character.
        character: char,
        /// The source line where the character appears.
        line:      usize,
        /// The 1-based column of the character within its line.
        column:    usize,
    },
    /// An integer literal that does not fit into 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the literal appears.
        line:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character,
                                     line,
                                     column, } => write!(f,
                                                         "Error on line {line}, column {column}: Illegal character '{}'.",
                                                         character.escape_debug()),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
