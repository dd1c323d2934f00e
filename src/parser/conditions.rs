use std::mem;

use crate::ast::{CompOp, Cond, CondComp, ConjOp, TokenKind};

use super::{ParseError, Parser};

/// Deepest allowed nesting of parenthesised groups and function calls,
/// counted together.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Tallest condition tree the parser builds. A chain of `n` comparisons is
/// `n` levels tall.
pub const MAX_TREE_DEPTH: usize = 10_000;

impl Parser {
    /// Parse a possibly compound condition, e.g.
    ///   t1.field1 = "val1" AND (t2.field1 <= -12.34 OR t1.field2 != "val2")
    ///
    /// Stops in front of end of input. Use [`Parser::parse_where`] to also
    /// require that nothing follows.
    pub fn parse_cond_tree(&mut self) -> Result<Cond, ParseError> {
        self.parse_cond_chain().map(|(cond, _)| cond)
    }

    /// `operand ((AND | OR) operand)*` inside the current group, folded so
    /// that the chain associates to the right. Returns the tree and its
    /// height. The token that ends the chain (`)` or EOF) is left unconsumed.
    fn parse_cond_chain(&mut self) -> Result<(Cond, usize), ParseError> {
        let groups = self.nesting;
        let mut tail = self.parse_cond_operand()?;
        let mut heads = Vec::new();

        loop {
            let tok = self.scan();
            if let Some(op) = ConjOp::from_token(tok.kind) {
                let next = self.parse_cond_operand()?;
                heads.push((mem::replace(&mut tail, next), op));
                continue;
            }

            match tok.kind {
                TokenKind::RParen if groups > 0 => {
                    self.unscan();
                    break;
                }
                TokenKind::RParen => {
                    return Err(ParseError::Condition(format!(
                        "unmatched ')' at position {}",
                        tok.pos
                    )));
                }
                TokenKind::Eof if groups > 0 => {
                    return Err(ParseError::Condition(format!(
                        "expected ')' to close {} open group(s), got EOF",
                        groups
                    )));
                }
                TokenKind::Eof => {
                    self.unscan();
                    break;
                }
                _ => {
                    return Err(ParseError::Condition(format!(
                        "expected AND or OR, got '{}' at position {}",
                        tok.describe(),
                        tok.pos
                    )));
                }
            }
        }

        let (mut tree, mut height) = tail;
        while let Some(((left, left_height), op)) = heads.pop() {
            height = 1 + left_height.max(height);
            if height > MAX_TREE_DEPTH {
                return Err(ParseError::Condition(format!(
                    "condition is nested deeper than {} levels",
                    MAX_TREE_DEPTH
                )));
            }
            tree = Cond::conj(op, left, tree);
        }
        Ok((tree, height))
    }

    /// A parenthesised group or a single comparison, with its height.
    fn parse_cond_operand(&mut self) -> Result<(Cond, usize), ParseError> {
        let tok = self.scan();
        match tok.kind {
            TokenKind::LParen => {
                self.enter_nesting(tok.pos, "groups", ParseError::Condition)?;
                let inner = self.parse_cond_chain();
                self.nesting -= 1;
                let inner = inner?;

                let close = self.scan();
                if !close.is(TokenKind::RParen) {
                    return Err(ParseError::Condition(format!(
                        "expected ')', got '{}'",
                        close.describe()
                    )));
                }
                Ok(inner)
            }
            TokenKind::Ident => {
                self.unscan();
                self.parse_cond_comp().map(|comp| (Cond::Comp(comp), 1))
            }
            _ => Err(ParseError::Condition(format!(
                "expected PAREN_L or IDENT, got '{}' at position {}",
                tok.describe(),
                tok.pos
            ))),
        }
    }

    /// Parse a single comparison, e.g. t1.field1 = "stringval".
    pub fn parse_cond_comp(&mut self) -> Result<CondComp, ParseError> {
        let tok = self.scan();
        if !tok.is(TokenKind::Ident) {
            return Err(ParseError::Condition(format!(
                "expected IDENT, got '{}'",
                tok.describe()
            )));
        }
        let ident = tok.literal;

        let tok = self.scan();
        let op = CompOp::from_token(tok.kind).ok_or_else(|| {
            ParseError::Condition(format!(
                "expected operator after {}, got '{}'",
                ident,
                tok.describe()
            ))
        })?;

        let val = self.parse_expr()?;

        Ok(CondComp { ident, op, val })
    }
}
