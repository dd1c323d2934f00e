use crate::ast::{Expr, FuncCall, TokenKind};

use super::{ParseError, Parser};

impl Parser {
    /// Parse a string, number or function call.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let tok = self.scan();
        match tok.kind {
            TokenKind::String => Ok(Expr::String(tok.literal)),
            TokenKind::Number => {
                let n: f64 = tok.literal.parse().map_err(|e| {
                    ParseError::Expression(format!("cannot parse number '{}': {}", tok.literal, e))
                })?;
                if !n.is_finite() {
                    return Err(ParseError::Expression(format!(
                        "number '{}' is out of range",
                        tok.literal
                    )));
                }
                Ok(Expr::Number(n))
            }
            TokenKind::Ident => {
                self.unscan();
                self.parse_func_call().map(Expr::FuncCall)
            }
            kind => Err(ParseError::Expression(format!(
                "expected expression (string, number or function call), got {} '{}'",
                kind,
                tok.describe()
            ))),
        }
    }

    /// Parse `name(arg, ...)`.
    pub fn parse_func_call(&mut self) -> Result<FuncCall, ParseError> {
        let tok = self.scan();
        if !tok.is(TokenKind::Ident) {
            return Err(ParseError::Expression(format!(
                "expected function name, got '{}'",
                tok.describe()
            )));
        }
        let name = tok.literal;

        let tok = self.scan();
        if !tok.is(TokenKind::LParen) {
            return Err(ParseError::Expression(format!(
                "expected '(' after {}, got '{}'",
                name,
                tok.describe()
            )));
        }

        self.enter_nesting(tok.pos, "function calls", ParseError::Expression)?;
        let args = self.parse_func_args(&name);
        self.nesting -= 1;

        Ok(FuncCall { name, args: args? })
    }

    /// Arguments after the opening `(`, through the closing `)`.
    fn parse_func_args(&mut self, name: &str) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        let tok = self.scan();
        match tok.kind {
            TokenKind::RParen => return Ok(args),
            TokenKind::Eof => {
                return Err(ParseError::Expression(format!(
                    "expected ')' in function {}, got EOF",
                    name
                )));
            }
            _ => self.unscan(),
        }

        loop {
            let arg = self.parse_expr().map_err(|e| {
                ParseError::Expression(format!(
                    "error parsing {} argument {}: {}",
                    name,
                    args.len() + 1,
                    e.message()
                ))
            })?;
            args.push(arg);

            let tok = self.scan();
            match tok.kind {
                TokenKind::Comma => continue,
                TokenKind::RParen => return Ok(args),
                _ => {
                    return Err(ParseError::Expression(format!(
                        "expected COMMA or PAREN_R after {} arg {}, got {}",
                        name,
                        args.len(),
                        tok.describe()
                    )));
                }
            }
        }
    }
}
