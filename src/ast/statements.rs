use std::fmt;

use crate::ast::Cond;

/// A parsed `SELECT * FROM ... WHERE ...` statement.
///
/// # Example
/// ```text
/// SELECT * FROM oilers WHERE goals > 50
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Target indices, in source order
    pub table_list: Vec<String>,

    /// Filter condition
    pub where_cond: Cond,
}

impl SelectStatement {
    pub fn new(table_list: Vec<String>, where_cond: Cond) -> Self {
        SelectStatement {
            table_list,
            where_cond,
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SELECT * FROM {} WHERE {}",
            self.table_list.join(", "),
            self.where_cond
        )
    }
}
