use std::fmt;

/// Kind of a lexical token.
///
/// The lexer pairs every kind with the literal text it matched, see [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Identifier, possibly dotted
    ///
    /// # Examples
    /// ```text
    /// name
    /// t1.field
    /// _internal
    /// ```
    Ident,

    /// String literal in double or single quotes, delimiters included
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'd'
    /// ```
    String,

    /// Number literal with optional sign and fraction
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -2345
    /// -.23
    /// ```
    Number,

    // Keywords (case-sensitive)
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Statement start
    Select,
    /// Index list introducer
    From,
    /// Condition introducer
    Where,

    // Operators
    /// `*` in a select list
    Star,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,

    /// A run of whitespace
    Whitespace,

    /// End of input. Scanning past the end keeps producing this.
    Eof,

    /// Anything the lexer could not classify
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Star => "STAR",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::LParen => "PAREN_L",
            TokenKind::RParen => "PAREN_R",
            TokenKind::Comma => "COMMA",
            TokenKind::Whitespace => "WS",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
        };
        f.write_str(name)
    }
}

/// A scanned token: its kind, the exact text matched and the char offset
/// where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, pos: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            pos,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Text used when a token is named in an error message.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "EOF".to_string(),
            _ => self.literal.clone(),
        }
    }
}
