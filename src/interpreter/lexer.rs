use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// Keywords are declared as exact tokens so that they win over the
/// identifier regex when both match the same text. Longer matches still win,
/// so `model` lexes as a single identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens such as `42` or `-7`. Every leading minus sign is
    /// part of the literal, so `--3` is the number `3`.
    #[regex(r"-*[0-9]+", parse_number)]
    Number(i64),
    /// Boolean literal tokens: `#t` or `#f`.
    #[token("#t", |_| true)]
    #[token("#f", |_| false)]
    Bool(bool),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `mod`
    #[token("mod")]
    Modulus,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Smaller,
    /// `=`
    #[token("=")]
    Equal,
    /// `print-num`
    #[token("print-num")]
    PrintNum,
    /// `print-bool`
    #[token("print-bool")]
    PrintBool,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `if`
    #[token("if")]
    If,
    /// `define`
    #[token("define")]
    Define,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "#t"),
            Self::Bool(false) => write!(f, "#f"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Modulus => write!(f, "mod"),
            Self::Greater => write!(f, ">"),
            Self::Smaller => write!(f, "<"),
            Self::Equal => write!(f, "="),
            Self::PrintNum => write!(f, "print-num"),
            Self::PrintBool => write!(f, "print-bool"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::If => write!(f, "if"),
            Self::Define => write!(f, "define"),
            Self::Fun => write!(f, "fun"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// both tokens and lexical errors can be located in the source.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses an integer literal, dropping every leading minus sign but the
/// sign it implies. An odd number of minus signs yields a negative number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    let slice = lex.slice();
    let digits = slice.trim_start_matches('-');
    let negative = (slice.len() - digits.len()) % 2 == 1;

    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Converts source text into `(Token, line)` pairs.
///
/// Lexing never aborts. Every character that does not start a token is
/// reported as a [`LexError`] and skipped, and lexing resumes right after it.
///
/// # Returns
/// The recognized tokens in source order, together with the diagnostics for
/// everything that was skipped.
///
/// # Example
/// ```
/// use minilisp::interpreter::lexer::{Token, tokenize};
///
/// let (tokens, errors) = tokenize("(+ 1 $ 2)");
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1], (Token::Plus, 1));
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<(Token, usize)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                let span = lexer.span();
                let column = source[lexer.extras.line_start..span.start].chars().count() + 1;

                if slice.trim_start_matches('-').starts_with(|c: char| c.is_ascii_digit()) {
                    errors.push(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                            line });
                } else {
                    errors.extend(slice.chars().enumerate().map(|(offset, character)| {
                                                   LexError::IllegalCharacter { character,
                                                                                line,
                                                                                column: column + offset }
                                               }));
                }
            },
        }
    }

    (tokens, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        let (tokens, errors) = tokenize(source);
        assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
        tokens.into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("mod if fun define and or not"),
                   vec![Token::Modulus,
                        Token::If,
                        Token::Fun,
                        Token::Define,
                        Token::And,
                        Token::Or,
                        Token::Not]);
        assert_eq!(kinds("print-num print-bool"),
                   vec![Token::PrintNum, Token::PrintBool]);
    }

    #[test]
    fn longer_identifiers_are_not_split() {
        assert_eq!(kinds("model iff"),
                   vec![Token::Identifier("model".to_string()),
                        Token::Identifier("iff".to_string())]);
    }

    #[test]
    fn minus_signs_belong_to_numbers() {
        assert_eq!(kinds("(- -5 3)"),
                   vec![Token::LParen,
                        Token::Minus,
                        Token::Number(-5),
                        Token::Number(3),
                        Token::RParen]);
        assert_eq!(kinds("--4 ---4"), vec![Token::Number(4), Token::Number(-4)]);
    }

    #[test]
    fn booleans_and_lines() {
        let (tokens, _) = tokenize("#t\n\n#f");
        assert_eq!(tokens, vec![(Token::Bool(true), 1), (Token::Bool(false), 3)]);
    }

    #[test]
    fn illegal_characters_are_skipped() {
        let (tokens, errors) = tokenize("(+ 1\n  @2)");
        assert_eq!(tokens.len(), 5);
        assert!(matches!(errors.as_slice(),
                         [LexError::IllegalCharacter { character: '@',
                                                       line:      2,
                                                       column:    3, }]));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let (tokens, errors) = tokenize("(+ 1 é 2)\n  ¤");
        assert_eq!(tokens.len(), 5);
        assert_eq!(errors,
                   vec![LexError::IllegalCharacter { character: 'é',
                                                     line:      1,
                                                     column:    6, },
                        LexError::IllegalCharacter { character: '¤',
                                                     line:      2,
                                                     column:    3, }]);
    }

    #[test]
    fn oversized_literal_is_reported() {
        let (tokens, errors) = tokenize("99999999999999999999 1");
        assert_eq!(tokens, vec![(Token::Number(1), 1)]);
        assert!(matches!(errors.as_slice(), [LexError::LiteralTooLarge { .. }]));
    }
}
