use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Statements are parsed until the closing `}`. Empty statements are
    /// skipped, and a statement that fails to parse is dropped after its
    /// error is recorded, so one bad line does not discard the whole body.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// The current token must be `{`; on success it is the matching `}`.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the input ends before the block is
    /// closed.
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();
        self.advance();

        while !self.current_is(&Token::RBrace) {
            if self.current_is(&Token::Eof) {
                return Err(ParseError::UnexpectedToken { expected: "}".to_string(),
                                                         found:    Token::Eof.to_string(),
                                                         line:     self.current_line, });
            }

            if !self.current_is(&Token::Semicolon)
               && let Some(statement) = self.parse_statement()
            {
                statements.push(statement);
            }
            self.advance();
        }

        Ok(Block { statements })
    }
}
