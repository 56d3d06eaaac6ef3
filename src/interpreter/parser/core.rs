use std::mem;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an infix token, weakest first.
///
/// `parse_expression(p)` keeps consuming infix operators as long as the next
/// one binds tighter than `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Assign,
    Question,
    Equals,
    LessOrGreater,
    Sum,
    Product,
    Prefix,
    Dot,
    Call,
    Index,
}

/// A Pratt parser over the token stream of one source text.
///
/// The parser never stops at the first error. A statement that fails to
/// parse is dropped, its error is recorded, and parsing resumes with the
/// next token.
///
/// # Example
/// ```
/// use quasi::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new("let x = 1 + 2 * 3;");
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<'src> {
    lexer:                   Lexer<'src>,
    pub(super) current:      Token,
    pub(super) current_line: usize,
    pub(super) peek:         Token,
    peek_line:               usize,
    pub(super) errors:       Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the first two tokens of `source` loaded.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let (current, current_line) = lexer.next_token();
        let (peek, peek_line) = lexer.next_token();
        Self { lexer,
               current,
               current_line,
               peek,
               peek_line,
               errors: Vec::new() }
    }

    /// Errors collected so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Shifts the lookahead token into the current position.
    pub(super) fn advance(&mut self) {
        let (next, next_line) = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
        self.current_line = mem::replace(&mut self.peek_line, next_line);
    }

    /// Compares token kinds, ignoring payloads.
    pub(super) fn current_is(&self, kind: &Token) -> bool {
        mem::discriminant(&self.current) == mem::discriminant(kind)
    }

    pub(super) fn peek_is(&self, kind: &Token) -> bool {
        mem::discriminant(&self.peek) == mem::discriminant(kind)
    }

    /// Advances past the lookahead token if it is of kind `expected`.
    ///
    /// # Errors
    /// `UnexpectedToken` naming both tokens otherwise; the parser does not
    /// move.
    pub(super) fn expect_peek(&mut self, expected: &Token) -> ParseResult<()> {
        if self.peek_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected_peek(expected.to_string()))
        }
    }

    /// Advances past an identifier lookahead token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        if let Token::Identifier(name) = &self.peek {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected_peek("identifier".to_string()))
        }
    }

    pub(super) fn unexpected_peek(&self, expected: String) -> ParseError {
        ParseError::UnexpectedToken { expected,
                                      found: self.peek.to_string(),
                                      line: self.peek_line }
    }

    /// Parses an expression whose infix operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix handler for the current token builds the leftmost operand.
    /// Each following infix operator with a higher precedence then takes the
    /// tree built so far as its left operand. A `;` always ends the
    /// expression.
    ///
    /// On success the current token is the last token of the expression.
    ///
    /// # Errors
    /// Any error raised by a prefix or infix handler.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && precedence < Precedence::of(&self.peek) {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }
}
