use crate::{
    ast::{Block, Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Dispatches the current token to its prefix handler.
    ///
    /// Prefix handlers build an expression that starts at the current token:
    /// literals, identifiers, `! + -`, grouping, `if`, `while`, function and
    /// macro literals, array and hash literals.
    ///
    /// # Errors
    /// `IllegalToken` for input the lexer could not recognize and
    /// `NoPrefixParse` for any other token that cannot start an expression.
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        match &self.current {
            Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone() }),
            Token::Integer(literal) => self.parse_integer(literal),
            Token::Double(literal) => self.parse_double(literal),
            Token::String(raw) => Ok(Expr::String(raw.clone())),
            Token::True => Ok(Expr::Boolean(true)),
            Token::False => Ok(Expr::Boolean(false)),
            Token::Null => Ok(Expr::Null),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Plus => self.parse_prefix_operator(PrefixOperator::Plus),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Minus),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::Function => {
                let (parameters, body) = self.parse_callable_literal()?;
                Ok(Expr::Function { parameters, body })
            },
            Token::Macro => {
                let (parameters, body) = self.parse_callable_literal()?;
                Ok(Expr::Macro { parameters, body })
            },
            Token::LBracket => {
                let elements = self.parse_expression_list(&Token::RBracket)?;
                Ok(Expr::Array { elements })
            },
            Token::LBrace => self.parse_hash(),
            Token::Illegal(literal) => Err(ParseError::IllegalToken { literal: literal.clone(),
                                                                      line:    self.current_line, }),
            other => Err(ParseError::NoPrefixParse { token: other.to_string(),
                                                     line:  self.current_line, }),
        }
    }

    fn parse_integer(&self, literal: &str) -> ParseResult<Expr> {
        literal.parse::<i64>()
               .map(Expr::Integer)
               .map_err(|_| ParseError::InvalidInteger { literal: literal.to_string(),
                                                         line:    self.current_line, })
    }

    fn parse_double(&self, literal: &str) -> ParseResult<Expr> {
        literal.parse::<f64>()
               .map(Expr::Double)
               .map_err(|_| ParseError::InvalidDouble { literal: literal.to_string(),
                                                        line:    self.current_line, })
    }

    /// Parses `!x`, `+x` and `-x`. The operand binds at `Prefix` strength,
    /// so `-a * b` is `(-a) * b`.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> ParseResult<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          right: Box::new(right) })
    }

    /// Parses `( expression )`. Grouping leaves no node of its own.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expr)
    }

    /// Parses `( condition )` for `if` and `while`, leaving the current
    /// token on `)`.
    fn parse_condition(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(condition)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> }
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` if the parentheses or braces are missing.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        let condition = self.parse_condition()?;
        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(&Token::Else) {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses `while (<condition>) { <statements> }`.
    fn parse_while(&mut self) -> ParseResult<Expr> {
        let condition = self.parse_condition()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::While { condition: Box::new(condition),
                         body })
    }

    /// Parses the `(params) { body }` tail shared by `function` and `macro`
    /// literals.
    fn parse_callable_literal(&mut self) -> ParseResult<(Vec<String>, Block)> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok((parameters, body))
    }

    /// Parses `{ key: value, ... }`. Keys are arbitrary expressions; whether
    /// they are hashable is decided at evaluation time.
    fn parse_hash(&mut self) -> ParseResult<Expr> {
        let mut entries = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(&Token::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            entries.push((key, value));

            if !self.peek_is(&Token::RBrace) {
                self.expect_peek(&Token::Comma)?;
            }
        }

        self.expect_peek(&Token::RBrace)?;
        Ok(Expr::Hash { entries })
    }
}
