use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser, Precedence},
            utils::infix_operator,
        },
    },
};

impl Parser<'_> {
    /// Dispatches the current token to its infix handler.
    ///
    /// `left` is the expression parsed so far; the handler returns the larger
    /// expression that uses it as its leftmost operand.
    ///
    /// # Errors
    /// `NoPrefixParse` style failures propagate from the right operand;
    /// `UnexpectedToken` for malformed calls, indexes and ternaries.
    pub(super) fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        match self.current {
            Token::LParen => self.parse_call(left),
            Token::LBracket => self.parse_index(left),
            Token::Dot => self.parse_dot_call(left),
            Token::Question => self.parse_ternary(left),
            _ => self.parse_infix_operator(left),
        }
    }

    /// Parses `left <op> right` where the right operand binds tighter than
    /// `op`, which makes every binary operator left associative.
    fn parse_infix_operator(&mut self, left: Expr) -> ParseResult<Expr> {
        let op = infix_operator(&self.current).ok_or_else(|| ParseError::NoPrefixParse {
                                                    token: self.current.to_string(),
                                                    line:  self.current_line,
                                                })?;
        let precedence = Precedence::of(&self.current);
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right) })
    }

    /// Parses `function(arguments)`.
    fn parse_call(&mut self, function: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Ok(Expr::Call { function: Box::new(function),
                        arguments })
    }

    /// Parses `target[index]`.
    fn parse_index(&mut self, target: Expr) -> ParseResult<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RBracket)?;

        Ok(Expr::Index { target: Box::new(target),
                         index:  Box::new(index), })
    }

    /// Parses `receiver.name(arguments)`.
    fn parse_dot_call(&mut self, receiver: Expr) -> ParseResult<Expr> {
        let function = self.expect_identifier()?;
        self.expect_peek(&Token::LParen)?;
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Ok(Expr::DotCall { receiver: Box::new(receiver),
                           function,
                           arguments })
    }

    /// Parses `condition ? consequence : alternative`. Both branches are
    /// parsed at the lowest precedence.
    fn parse_ternary(&mut self, condition: Expr) -> ParseResult<Expr> {
        self.advance();
        let consequence = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::Colon)?;
        self.advance();
        let alternative = self.parse_expression(Precedence::Lowest)?;

        Ok(Expr::Ternary { condition:   Box::new(condition),
                           consequence: Box::new(consequence),
                           alternative: Box::new(alternative), })
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::Statement, interpreter::parser::core::Parser};

    fn parse(source: &str) -> String {
        let mut parser = Parser::new(source);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "unexpected errors: {:?}", parser.errors());
        program.to_string()
    }

    fn errors(source: &str) -> Vec<String> {
        let mut parser = Parser::new(source);
        parser.parse_program();
        parser.errors().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(parse("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(parse("(1 + 2) * 3"), "((1 + 2) * 3)");
        assert_eq!(parse("a - b - c"), "((a - b) - c)");
        assert_eq!(parse("-a * b"), "((-a) * b)");
        assert_eq!(parse("!a == b"), "((!a) == b)");
    }

    #[test]
    fn comparison_and_logic_precedence() {
        assert_eq!(parse("a < b == c > d"), "((a < b) == (c > d))");
        assert_eq!(parse("a == b && c || d"), "(((a == b) && c) || d)");
        assert_eq!(parse("x = a && b"), "(x = (a && b))");
        assert_eq!(parse("x += 1 * 2"), "(x += (1 * 2))");
    }

    #[test]
    fn postfix_forms_bind_tightest() {
        assert_eq!(parse("a + f(b) * c[1]"), "(a + (f(b) * (c[1])))");
        assert_eq!(parse("a.push(1)[0]"), "(a.push(1)[0])");
        assert_eq!(parse("f(1)(2)"), "f(1)(2)");
    }

    #[test]
    fn ternary_and_if() {
        assert_eq!(parse("a > b ? a : b"), "((a > b) ? a : b)");
        assert_eq!(parse("if (x) { 1 } else { 2 }"), "if (x) { 1 } else { 2 }");
        assert_eq!(parse("while (i < 3) { i += 1; }"), "while ((i < 3)) { (i += 1) }");
    }

    #[test]
    fn literals() {
        assert_eq!(parse("[1, 2.5, \"s\", null, true,]"), "[1, 2.5, \"s\", null, true]");
        assert_eq!(parse("{\"a\": 1, 2: [3]}"), "{\"a\": 1, 2: [3]}");
        assert_eq!(parse("function(a, b) { return a + b; }"),
                   "function(a, b) { return (a + b); }");
        assert_eq!(parse("let m = macro(x) { quote(unquote(x)) };"),
                   "let m = macro(x) { quote(unquote(x)) };");
    }

    #[test]
    fn bare_return_returns_null() {
        let mut parser = Parser::new("return;");
        let program = parser.parse_program();
        assert_eq!(program.statements,
                   vec![Statement::Return { value: crate::ast::Expr::Null }]);
    }

    #[test]
    fn semicolons_are_optional() {
        assert_eq!(parse("let a = 1\nlet b = 2;;a"), "let a = 1;\nlet b = 2;\na");
    }

    #[test]
    fn errors_do_not_stop_parsing() {
        let mut parser = Parser::new("let = 1; let y = 2; ) ; y");
        let program = parser.parse_program();
        assert_eq!(parser.errors().len(), 3);
        assert_eq!(program.to_string(), "1\nlet y = 2;\ny");
    }

    #[test]
    fn errors_carry_their_line() {
        let mut parser = Parser::new("let a = 1;\n\"two\nlines\";\nlet = 3;");
        parser.parse_program();
        let lines: Vec<_> = parser.errors().iter().map(|e| e.line()).collect();
        assert_eq!(lines.first(), Some(&4));
    }

    #[test]
    fn error_messages_name_the_tokens() {
        assert_eq!(errors("if x"),
                   vec!["Error on line 1: expected next token to be (, got x instead.".to_string()]);
        assert_eq!(errors("1 # 2"),
                   vec!["Error on line 1: illegal token #.".to_string()]);
        assert_eq!(errors("99999999999999999999"),
                   vec!["Error on line 1: could not parse 99999999999999999999 as integer."
                        .to_string()]);
        assert_eq!(errors("[1, 2"),
                   vec!["Error on line 1: expected next token to be ], got EOF instead."
                        .to_string()]);
    }
}
