use crate::{
    ast::{Token, TokenKind},
    lexer::Lexer,
};

/// Pulls tokens from a [`Lexer`] on demand and can push the most recently
/// scanned token back, giving the parser one token of lookahead.
pub struct TokenCursor {
    lexer: Lexer,
    last: Option<Token>,
    replay: bool,
}

impl TokenCursor {
    pub fn new(lexer: Lexer) -> Self {
        TokenCursor {
            lexer,
            last: None,
            replay: false,
        }
    }

    /// Next token, whitespace included.
    pub fn scan(&mut self) -> Token {
        if self.replay {
            self.replay = false;
            if let Some(tok) = &self.last {
                return tok.clone();
            }
        }

        let tok = self.lexer.scan();
        self.last = Some(tok.clone());
        tok
    }

    /// Next token that is not whitespace.
    pub fn scan_ignore_whitespace(&mut self) -> Token {
        loop {
            let tok = self.scan();
            if !tok.is(TokenKind::Whitespace) {
                return tok;
            }
        }
    }

    /// Makes the next `scan` return the last scanned token again.
    /// Only one level of pushback exists.
    pub fn unscan(&mut self) {
        debug_assert!(!self.replay, "unscan called twice in a row");
        debug_assert!(self.last.is_some(), "unscan before any scan");
        self.replay = true;
    }
}
