use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Parsing does not stop at the first error, so a program may report several
/// of these at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token appeared where no expression can start.
    #[error("Error on line {line}: no prefix parse function for {token} found.")]
    NoPrefixParse {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The parser required a specific token and found another one.
    #[error("Error on line {line}: expected next token to be {expected}, got {found} instead.")]
    UnexpectedToken {
        /// The token the grammar required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error on line {line}: could not parse {literal} as integer.")]
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A double literal could not be read.
    #[error("Error on line {line}: could not parse {literal} as double.")]
    InvalidDouble {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The lexer could not recognize a piece of the input.
    #[error("Error on line {line}: illegal token {literal}.")]
    IllegalToken {
        /// The unrecognized text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::NoPrefixParse { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidDouble { line, .. }
            | Self::IllegalToken { line, .. } => *line,
        }
    }
}
