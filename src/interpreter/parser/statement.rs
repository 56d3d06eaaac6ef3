use log::trace;

use crate::{
    ast::{Expr, Program, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the whole token stream into a [`Program`].
    ///
    /// Always returns a program. Statements that failed to parse are missing
    /// from it and their errors are available through
    /// [`errors`](Parser::errors), which callers must check before
    /// evaluating.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(&Token::Eof) {
            if !self.current_is(&Token::Semicolon)
               && let Some(statement) = self.parse_statement()
            {
                program.statements.push(statement);
            }
            self.advance();
        }

        trace!("parsed {} statements with {} errors",
               program.statements.len(),
               self.errors.len());
        program
    }

    /// Parses one statement starting at the current token.
    ///
    /// Recognizes `let` and `return`; anything else is an expression
    /// statement. A trailing `;` is consumed when present but never
    /// required.
    ///
    /// # Returns
    /// The statement, or `None` after recording the error that stopped it.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        let result = match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.errors.push(error);
                None
            },
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_identifier()?;
        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses `return <expression>;`, or `return;` which returns `null`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        if self.peek_is(&Token::Semicolon) {
            self.advance();
            return Ok(Statement::Return { value: Expr::Null });
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { expr })
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }
    }
}
