//! Recursive-descent parser for essql statements and `WHERE` clauses.
//!
//! Grammar:
//!
//! ```text
//! statement  := SELECT '*' FROM ident (',' ident)* WHERE condTree EOF
//! condTree   := operand ((AND | OR) condTree)?
//! operand    := '(' condTree ')' | comparison
//! comparison := IDENT compOp expr
//! expr       := STRING | NUMBER | funcCall
//! funcCall   := IDENT '(' (expr (',' expr)*)? ')'
//! ```
//!
//! Conjunction chains associate to the right. Parenthesised groups are
//! tracked by depth, so every `)` must close a group opened by a `(`.
//!
//! Groups and function calls share one nesting budget of
//! [`MAX_NESTING_DEPTH`] levels; chains are collected in a loop and only the
//! finished tree height is capped at [`MAX_TREE_DEPTH`]. Input past either
//! limit is a [`ParseError`], never a stack overflow.

mod conditions;
mod expressions;

use thiserror::Error;
use tracing::debug;

use crate::{
    ast::{Cond, SelectStatement, Token, TokenKind},
    cursor::TokenCursor,
    lexer::Lexer,
};

pub use conditions::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH};

/// Errors raised while parsing. None of them are recoverable; the first one
/// aborts the parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Malformed literal or function call, or an unexpected token where an
    /// expression was required
    #[error("expression error: {0}")]
    Expression(String),

    /// Malformed comparison, conjunction or grouping
    #[error("condition error: {0}")]
    Condition(String),

    /// Malformed `SELECT ... FROM ... WHERE` structure
    #[error("statement error: {0}")]
    Statement(String),
}

impl ParseError {
    /// The message without the error kind prefix.
    pub fn message(&self) -> &str {
        match self {
            ParseError::Expression(msg) | ParseError::Condition(msg) | ParseError::Statement(msg) => msg,
        }
    }
}

pub struct Parser {
    cursor: TokenCursor,
    /// Open groups plus open function calls
    nesting: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser {
            cursor: TokenCursor::new(lexer),
            nesting: 0,
        }
    }

    fn scan(&mut self) -> Token {
        self.cursor.scan_ignore_whitespace()
    }

    fn unscan(&mut self) {
        self.cursor.unscan();
    }

    /// Claims one level of the nesting budget for a `(` at `pos`. The caller
    /// gives it back by decrementing `nesting` once the construct is parsed.
    fn enter_nesting(
        &mut self,
        pos: usize,
        what: &str,
        error: fn(String) -> ParseError,
    ) -> Result<(), ParseError> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(error(format!(
                "{} nested deeper than {} at position {}",
                what, MAX_NESTING_DEPTH, pos
            )));
        }
        self.nesting += 1;
        Ok(())
    }

    fn expect_statement(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let tok = self.scan();
        if tok.is(kind) {
            Ok(tok)
        } else {
            Err(ParseError::Statement(format!(
                "expected {}, got '{}' at position {}",
                kind,
                tok.describe(),
                tok.pos
            )))
        }
    }

    /// Parse a complete `SELECT` statement.
    pub fn parse(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_statement(TokenKind::Select)?;

        let projection = self.scan();
        if !projection.is(TokenKind::Star) {
            return Err(ParseError::Statement(format!(
                "only SELECT * is supported, got '{}'",
                projection.describe()
            )));
        }

        self.expect_statement(TokenKind::From)?;

        let mut table_list = vec![self.expect_statement(TokenKind::Ident)?.literal];
        loop {
            let tok = self.scan();
            match tok.kind {
                TokenKind::Comma => {
                    table_list.push(self.expect_statement(TokenKind::Ident)?.literal);
                }
                TokenKind::Where => break,
                _ => {
                    return Err(ParseError::Statement(format!(
                        "expected COMMA or WHERE after index list, got '{}'",
                        tok.describe()
                    )));
                }
            }
        }

        let where_cond = self.parse_where()?;
        let stmt = SelectStatement::new(table_list, where_cond);
        debug!(statement = %stmt, "parsed statement");
        Ok(stmt)
    }

    /// Parse a bare condition tree that must span the rest of the input.
    pub fn parse_where(&mut self) -> Result<Cond, ParseError> {
        let cond = self.parse_cond_tree()?;

        let tok = self.scan();
        if !tok.is(TokenKind::Eof) {
            return Err(ParseError::Condition(format!(
                "unexpected '{}' after condition at position {}",
                tok.describe(),
                tok.pos
            )));
        }

        debug!(depth = cond.depth(), cond = %cond, "parsed condition");
        Ok(cond)
    }
}

/// Parse a complete `SELECT * FROM ... WHERE ...` statement.
pub fn parse(input: &str) -> Result<SelectStatement, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}

/// Parse a bare `WHERE` clause body.
pub fn parse_condition(input: &str) -> Result<Cond, ParseError> {
    Parser::new(Lexer::new(input)).parse_where()
}
