use std::{fmt, ops::Range};

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Double literal tokens, such as `3.14`. A leading sign may be merged in
    /// by [`Lexer`].
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Double(String),
    /// Integer literal tokens, such as `42`. The digits are kept as text so
    /// the parser can report literals that overflow.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens. The quotes are stripped; escapes are left as
    /// written.
    #[regex(r#""[^"]*""#, |lex| {
        let slice        = lex.slice();
        lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
        slice[1..slice.len() - 1].to_string()
    })]
    String(String),
    /// `function`
    #[token("function")]
    Function,
    /// `macro`
    #[token("macro")]
    Macro,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; binding names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    AsteriskAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `?`
    #[token("?")]
    Question,
    /// `.`
    #[token(".")]
    Dot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Input the lexer could not recognize, kept verbatim for error reports.
    Illegal(String),
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

/// State carried by the lexer while scanning.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// Current line, starting at 1.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl Token {
    /// Returns `true` if an expression can end with this token.
    ///
    /// A sign directly after such a token is a binary operator, never part of
    /// a number literal.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Identifier(_)
                 | Self::Integer(_)
                 | Self::Double(_)
                 | Self::String(_)
                 | Self::True
                 | Self::False
                 | Self::Null
                 | Self::RParen
                 | Self::RBracket
                 | Self::RBrace)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Double(text) | Self::Integer(text) | Self::Identifier(text) | Self::Illegal(text) => {
                return write!(f, "{text}");
            },
            Self::String(text) => return write!(f, "\"{text}\""),
            Self::Function => "function",
            Self::Macro => "macro",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::While => "while",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::AsteriskAssign => "*=",
            Self::SlashAssign => "/=",
            Self::PercentAssign => "%=",
            Self::Bang => "!",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Question => "?",
            Self::Dot => ".",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "EOF",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug)]
struct Lexeme {
    token: Token,
    span:  Range<usize>,
    line:  usize,
}

/// Pulls tokens out of source text one at a time.
///
/// Wraps the generated `logos` lexer, turning unrecognized input into
/// [`Token::Illegal`] and merging a `+`/`-` into the number literal written
/// directly after it when the sign cannot be a binary operator.
///
/// # Example
/// ```
/// use quasi::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("a-2 (-2)");
/// assert_eq!(lexer.next_token().0, Token::Identifier("a".to_string()));
/// assert_eq!(lexer.next_token().0, Token::Minus);
/// assert_eq!(lexer.next_token().0, Token::Integer("2".to_string()));
/// assert_eq!(lexer.next_token().0, Token::LParen);
/// assert_eq!(lexer.next_token().0, Token::Integer("-2".to_string()));
/// ```
pub struct Lexer<'src> {
    inner:         logos::Lexer<'src, Token>,
    pending:       Option<Lexeme>,
    after_operand: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:         Token::lexer_with_extras(source, LexerExtras::default()),
               pending:       None,
               after_operand: false, }
    }

    fn scan(&mut self) -> Option<Lexeme> {
        let token = self.inner
                        .next()?
                        .unwrap_or_else(|()| Token::Illegal(self.inner.slice().to_string()));
        Some(Lexeme { token,
                      span: self.inner.span(),
                      line: self.inner.extras.line })
    }

    /// Returns the next token with the line it was found on.
    ///
    /// Never fails: unknown input becomes [`Token::Illegal`] and the end of
    /// input is reported as [`Token::Eof`] on every call after the last token.
    pub fn next_token(&mut self) -> (Token, usize) {
        let Some(mut lexeme) = self.pending.take().or_else(|| self.scan()) else {
            return (Token::Eof, self.inner.extras.line);
        };

        if !self.after_operand
           && matches!(lexeme.token, Token::Plus | Token::Minus)
           && let Some(next) = self.scan()
        {
            let adjacent = next.span.start == lexeme.span.end;
            let negative = lexeme.token == Token::Minus;
            match (adjacent, next.token) {
                (true, Token::Integer(digits)) => {
                    lexeme.token = Token::Integer(signed(negative, &digits));
                },
                (true, Token::Double(digits)) => {
                    lexeme.token = Token::Double(signed(negative, &digits));
                },
                (_, token) => {
                    self.pending = Some(Lexeme { token, ..next });
                },
            }
        }

        self.after_operand = lexeme.token.ends_operand();
        (lexeme.token, lexeme.line)
    }
}

fn signed(negative: bool, digits: &str) -> String {
    if negative { format!("-{digits}") } else { digits.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let (token, _) = lexer.next_token();
            if token == Token::Eof {
                return out;
            }
            out.push(token);
        }
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    fn int(text: &str) -> Token {
        Token::Integer(text.to_string())
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(tokens("let function macro whiles null"),
                   vec![Token::Let, Token::Function, Token::Macro, ident("whiles"), Token::Null]);
    }

    #[test]
    fn compound_operators() {
        assert_eq!(tokens("a += 1 && b != c || d %= 2"),
                   vec![ident("a"),
                        Token::PlusAssign,
                        int("1"),
                        Token::And,
                        ident("b"),
                        Token::NotEqual,
                        ident("c"),
                        Token::Or,
                        ident("d"),
                        Token::PercentAssign,
                        int("2")]);
    }

    #[test]
    fn sign_after_operand_stays_an_operator() {
        assert_eq!(tokens("a-2"), vec![ident("a"), Token::Minus, int("2")]);
        assert_eq!(tokens("(1)+2"), vec![Token::LParen, int("1"), Token::RParen, Token::Plus, int("2")]);
    }

    #[test]
    fn sign_is_absorbed_where_no_operand_precedes() {
        assert_eq!(tokens("x = -2.5"),
                   vec![ident("x"), Token::Assign, Token::Double("-2.5".to_string())]);
        assert_eq!(tokens("[+1, -2]"),
                   vec![Token::LBracket, int("1"), Token::Comma, int("-2"), Token::RBracket]);
    }

    #[test]
    fn sign_separated_by_space_is_not_absorbed() {
        assert_eq!(tokens("- 2"), vec![Token::Minus, int("2")]);
        assert_eq!(tokens("-x"), vec![Token::Minus, ident("x")]);
    }

    #[test]
    fn string_keeps_raw_escapes() {
        assert_eq!(tokens(r#""a\nb""#), vec![Token::String(r"a\nb".to_string())]);
    }

    #[test]
    fn unknown_characters_are_illegal() {
        assert_eq!(tokens("1 # 2"), vec![int("1"), Token::Illegal("#".to_string()), int("2")]);
    }

    #[test]
    fn eof_repeats_and_lines_are_counted() {
        let mut lexer = Lexer::new("a\n// note\n\nb");
        assert_eq!(lexer.next_token(), (ident("a"), 1));
        assert_eq!(lexer.next_token(), (ident("b"), 4));
        assert_eq!(lexer.next_token().0, Token::Eof);
        assert_eq!(lexer.next_token().0, Token::Eof);
    }
}
