use std::{fmt, mem};

use crate::ast::{CompOp, ConjOp, Expr};

/// Node of the condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// A single comparison
    ///
    /// # Example
    /// ```text
    /// t1.field = "bucky"
    /// ```
    Comp(CondComp),

    /// Two conditions joined by `AND` or `OR`
    ///
    /// # Example
    /// ```text
    /// f1 = "v1" AND (f2 != "v2" OR id = 12)
    /// ```
    Conj(CondConj),
}

/// `ident op value`, e.g. `myNum >= 12.34`.
#[derive(Debug, Clone, PartialEq)]
pub struct CondComp {
    pub ident: String,
    pub op: CompOp,
    pub val: Expr,
}

/// One level of an `AND`/`OR` chain. Both sides are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct CondConj {
    pub op: ConjOp,
    pub left: Box<Cond>,
    pub right: Box<Cond>,
}

impl Cond {
    pub fn comp(ident: impl Into<String>, op: CompOp, val: Expr) -> Cond {
        Cond::Comp(CondComp {
            ident: ident.into(),
            op,
            val,
        })
    }

    pub fn conj(op: ConjOp, left: Cond, right: Cond) -> Cond {
        Cond::Conj(CondConj {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Height of the tree; a single comparison has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((cond, level)) = stack.pop() {
            match cond {
                Cond::Comp(_) => deepest = deepest.max(level),
                Cond::Conj(conj) => {
                    stack.push((&conj.left, level + 1));
                    stack.push((&conj.right, level + 1));
                }
            }
        }
        deepest
    }

    /// Leaf with no heap data, swapped in while tearing a tree down.
    fn vacant() -> Cond {
        Cond::Comp(CondComp {
            ident: String::new(),
            op: CompOp::Eq,
            val: Expr::Number(0.0),
        })
    }
}

/// Pieces still to be written by the `Display` walk.
enum Piece<'a> {
    Cond(&'a Cond),
    Op(ConjOp),
    Text(&'static str),
}

// Conjunction chains can be thousands of nodes tall, so formatting walks an
// explicit stack instead of recursing.
impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Cond(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Cond(Cond::Comp(comp)) => fmt::Display::fmt(comp, f)?,
                Piece::Cond(Cond::Conj(conj)) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Cond(&conj.right));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Op(conj.op));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Cond(&conj.left));
                }
                Piece::Op(op) => fmt::Display::fmt(&op, f)?,
                Piece::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for CondComp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ident, self.op, self.val)
    }
}

impl fmt::Display for CondConj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

// Unlinks children onto a heap stack so dropping a tall chain does not
// recurse once per node.
impl Drop for CondConj {
    fn drop(&mut self) {
        let mut orphans = vec![
            mem::replace(&mut *self.left, Cond::vacant()),
            mem::replace(&mut *self.right, Cond::vacant()),
        ];
        while let Some(cond) = orphans.pop() {
            if let Cond::Conj(mut conj) = cond {
                orphans.push(mem::replace(&mut *conj.left, Cond::vacant()));
                orphans.push(mem::replace(&mut *conj.right, Cond::vacant()));
            }
        }
    }
}
