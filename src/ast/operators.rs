use std::fmt;

use crate::ast::TokenKind;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompOp {
    /// Equal (`=`)
    Eq,
    /// Not equal (`!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,
}

impl CompOp {
    pub const ALL: [CompOp; 6] = [
        CompOp::Eq,
        CompOp::Ne,
        CompOp::Lt,
        CompOp::Le,
        CompOp::Gt,
        CompOp::Ge,
    ];

    pub fn from_token(kind: TokenKind) -> Option<CompOp> {
        match kind {
            TokenKind::Eq => Some(CompOp::Eq),
            TokenKind::Ne => Some(CompOp::Ne),
            TokenKind::Lt => Some(CompOp::Lt),
            TokenKind::Le => Some(CompOp::Le),
            TokenKind::Gt => Some(CompOp::Gt),
            TokenKind::Ge => Some(CompOp::Ge),
            _ => None,
        }
    }

    /// True for the inequality bounds `<`, `<=`, `>`, `>=`.
    pub fn is_range(self) -> bool {
        match self {
            CompOp::Lt | CompOp::Le | CompOp::Gt | CompOp::Ge => true,
            CompOp::Eq | CompOp::Ne => false,
        }
    }
}

impl fmt::Display for CompOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompOp::Eq => "=",
            CompOp::Ne => "!=",
            CompOp::Lt => "<",
            CompOp::Le => "<=",
            CompOp::Gt => ">",
            CompOp::Ge => ">=",
        })
    }
}

/// Conjunction operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjOp {
    /// Logical AND (`AND`)
    And,
    /// Logical OR (`OR`)
    Or,
}

impl ConjOp {
    pub fn from_token(kind: TokenKind) -> Option<ConjOp> {
        match kind {
            TokenKind::And => Some(ConjOp::And),
            TokenKind::Or => Some(ConjOp::Or),
            _ => None,
        }
    }
}

impl fmt::Display for ConjOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConjOp::And => "AND",
            ConjOp::Or => "OR",
        })
    }
}
