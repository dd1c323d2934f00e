use crate::ast::{Token, TokenKind};

/// Splits a query into [`Token`]s, one per call to [`Lexer::scan`].
///
/// The lexer never fails. Characters it cannot classify come back as
/// [`TokenKind::Illegal`] tokens and the parser decides how to report them.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn read_whitespace(&mut self) -> Token {
        let start = self.position;
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
        Token::new(TokenKind::Whitespace, self.text_from(start), start)
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let ident = self.text_from(start);
        let kind = match ident.as_str() {
            "AND" => TokenKind::And,
            "OR" => TokenKind::Or,
            "SELECT" => TokenKind::Select,
            "FROM" => TokenKind::From,
            "WHERE" => TokenKind::Where,
            _ => TokenKind::Ident,
        };
        Token::new(kind, ident, start)
    }

    /// Reads through the matching closing quote. The literal keeps both
    /// delimiters; there are no escape sequences.
    fn read_string(&mut self, quote: char) -> Token {
        let start = self.position;
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == quote {
                return Token::new(TokenKind::String, self.text_from(start), start);
            }
        }

        // unterminated
        Token::new(TokenKind::Illegal, self.text_from(start), start)
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        let mut seen_dot = false;
        let mut digits = 0;

        if self.current_char() == Some('-') {
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                digits += 1;
                self.advance();
            } else if ch == '.' && !seen_dot && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let kind = if digits > 0 {
            TokenKind::Number
        } else {
            TokenKind::Illegal
        };
        Token::new(kind, self.text_from(start), start)
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, self.text_from(start), start)
    }

    /// Returns `with_eq` if the next char is `=`, consuming both, otherwise
    /// `alone` for the single char.
    fn maybe_eq(&mut self, alone: TokenKind, with_eq: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        let kind = if self.current_char() == Some('=') {
            self.advance();
            with_eq
        } else {
            alone
        };
        Token::new(kind, self.text_from(start), start)
    }

    /// Scans the next token, including whitespace runs.
    pub fn scan(&mut self) -> Token {
        match self.current_char() {
            None => Token::new(TokenKind::Eof, "", self.position),
            Some(ch) if ch.is_whitespace() => self.read_whitespace(),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => self.read_identifier(),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.read_number(),
            Some('"') => self.read_string('"'),
            Some('\'') => self.read_string('\''),
            Some('=') => self.single(TokenKind::Eq),
            Some('<') => self.maybe_eq(TokenKind::Lt, TokenKind::Le),
            Some('>') => self.maybe_eq(TokenKind::Gt, TokenKind::Ge),
            Some('!') => self.maybe_eq(TokenKind::Illegal, TokenKind::Ne),
            Some('(') => self.single(TokenKind::LParen),
            Some(')') => self.single(TokenKind::RParen),
            Some(',') => self.single(TokenKind::Comma),
            Some('*') => self.single(TokenKind::Star),
            Some(_) => self.single(TokenKind::Illegal),
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("AND OR and");
    assert_eq!(lexer.scan().kind, TokenKind::And);
    assert_eq!(lexer.scan().kind, TokenKind::Whitespace);
    assert_eq!(lexer.scan().kind, TokenKind::Or);
    assert_eq!(lexer.scan().kind, TokenKind::Whitespace);
    assert_eq!(lexer.scan(), Token::new(TokenKind::Ident, "and", 7));
    assert_eq!(lexer.scan().kind, TokenKind::Eof);
}

#[test]
fn test_comparison() {
    let mut lexer = Lexer::new("t1.A!='a'");
    assert_eq!(lexer.scan(), Token::new(TokenKind::Ident, "t1.A", 0));
    assert_eq!(lexer.scan(), Token::new(TokenKind::Ne, "!=", 4));
    assert_eq!(lexer.scan(), Token::new(TokenKind::String, "'a'", 6));
    assert_eq!(lexer.scan().kind, TokenKind::Eof);
}
