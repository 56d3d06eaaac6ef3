use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Precedence {
    /// Looks up the binding strength of `token` in infix position.
    ///
    /// Tokens that cannot continue an expression map to `Lowest`, which
    /// stops the precedence climbing loop.
    #[must_use]
    pub const fn of(token: &Token) -> Self {
        match token {
            Token::Assign
            | Token::PlusAssign
            | Token::MinusAssign
            | Token::AsteriskAssign
            | Token::SlashAssign
            | Token::PercentAssign => Self::Assign,
            Token::Question | Token::And | Token::Or => Self::Question,
            Token::Equal | Token::NotEqual => Self::Equals,
            Token::Less | Token::Greater | Token::LessEqual | Token::GreaterEqual => {
                Self::LessOrGreater
            },
            Token::Plus | Token::Minus => Self::Sum,
            Token::Asterisk | Token::Slash | Token::Percent => Self::Product,
            Token::Dot => Self::Dot,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    let op = match token {
        Token::Assign => InfixOperator::Assign,
        Token::Plus => InfixOperator::Add,
        Token::Minus => InfixOperator::Subtract,
        Token::Asterisk => InfixOperator::Multiply,
        Token::Slash => InfixOperator::Divide,
        Token::Percent => InfixOperator::Modulo,
        Token::PlusAssign => InfixOperator::AddAssign,
        Token::MinusAssign => InfixOperator::SubtractAssign,
        Token::AsteriskAssign => InfixOperator::MultiplyAssign,
        Token::SlashAssign => InfixOperator::DivideAssign,
        Token::PercentAssign => InfixOperator::ModuloAssign,
        Token::Equal => InfixOperator::Equal,
        Token::NotEqual => InfixOperator::NotEqual,
        Token::Less => InfixOperator::Less,
        Token::LessEqual => InfixOperator::LessEqual,
        Token::Greater => InfixOperator::Greater,
        Token::GreaterEqual => InfixOperator::GreaterEqual,
        Token::And => InfixOperator::And,
        Token::Or => InfixOperator::Or,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Parses a comma separated list of expressions up to `closing`.
    ///
    /// Used by array literals and call argument lists. The current token is
    /// the opening delimiter; on success it is `closing`. An immediately
    /// encountered closing token gives an empty list and a trailing comma is
    /// accepted.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)* ","?)?`
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or the list is not
    /// closed by `closing`.
    pub(super) fn parse_expression_list(&mut self, closing: &Token) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            if self.peek_is(closing) {
                break;
            }
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses the parenthesized parameter list of a function or macro
    /// literal.
    ///
    /// The current token must be `(`; on success it is `)`.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if a parameter is not an identifier or the
    /// list is not closed.
    pub(super) fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(parameters)
    }
}
