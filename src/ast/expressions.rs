use std::fmt;

/// Value expression on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal, kept exactly as scanned including its quotes
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// 'd'
    /// ```
    String(String),

    /// Number literal. Integers are stored as floats too.
    ///
    /// # Example
    /// ```text
    /// 42
    /// -43.21
    /// ```
    Number(f64),

    /// Function call
    ///
    /// # Example
    /// ```text
    /// FuncName("stringArg", -43.21, InnerFunc("innerArg"))
    /// ```
    FuncCall(FuncCall),
}

/// `name(arg, ...)`. A call without arguments has an empty `args`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expr>,
}

impl FuncCall {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        FuncCall {
            name: name.into(),
            args,
        }
    }
}

impl Expr {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::String(_) => "string",
            Expr::Number(_) => "number",
            Expr::FuncCall(_) => "function call",
        }
    }

    pub fn string(literal: impl Into<String>) -> Self {
        Expr::String(literal.into())
    }
}

/// Strips one pair of matching `"` or `'` delimiters, if present.
pub fn unquote(literal: &str) -> &str {
    for quote in ['"', '\''] {
        if literal.len() >= 2 && literal.starts_with(quote) && literal.ends_with(quote) {
            return &literal[1..literal.len() - 1];
        }
    }
    literal
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::String(s) => f.write_str(s),
            Expr::Number(n) => write!(f, "{}", n),
            Expr::FuncCall(call) => fmt::Display::fmt(call, f),
        }
    }
}

impl fmt::Display for FuncCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""abc""#), "abc");
        assert_eq!(unquote("'d'"), "d");
        assert_eq!(unquote(r#""""#), "");
        assert_eq!(unquote(r#""mixed'"#), r#""mixed'"#);
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("bare"), "bare");
    }

    #[test]
    fn test_display() {
        let call = Expr::FuncCall(FuncCall::new(
            "FuncName",
            vec![
                Expr::string(r#""stringArg""#),
                Expr::Number(-43.21),
                Expr::FuncCall(FuncCall::new("Inner", vec![])),
            ],
        ));
        assert_eq!(call.to_string(), r#"FuncName("stringArg", -43.21, Inner())"#);
        assert_eq!(Expr::Number(-9.0).to_string(), "-9");
    }
}
