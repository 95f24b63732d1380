//! Recursive-descent parser over the token stream.
//!
//! Grammar (binding loosest to tightest):
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('+' | '-') unary | power
//! power := atom (('**' | '^') unary)?          right-associative
//! atom  := NUMBER
//!        | 'x' | CONSTANT
//!        | FUNC '(' expr (',' expr)* ')'
//!        | '(' expr ')'
//! ```
//!
//! Unary minus binds looser than exponentiation, so `-x**2` is
//! `-(x**2)`, and the exponent re-enters at `unary` so `2**-3` parses.
//! Names resolve against the allow-list here, at parse time; an AST
//! that parses can only ever touch float math.

use super::ast::{BinOp, Expr};
use super::builtins::{self, Builtin};
use super::errors::ParseError;
use super::token::{Tok, Token};

pub(crate) fn parse_tokens(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut cursor = Cursor { tokens, pos: 0 };
    let expr = cursor.expr()?;

    if let Some(token) = cursor.peek() {
        return Err(ParseError::UnexpectedToken {
            found: token.tok.describe(),
            position: token.position,
        });
    }

    Ok(expr)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        while let Some(token) = self.peek() {
            let op = match token.tok {
                Tok::Plus => BinOp::Add,
                Tok::Minus => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        while let Some(token) = self.peek() {
            let op = match token.tok {
                Tok::Star => BinOp::Mul,
                Tok::Slash => BinOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().map(|t| &t.tok) {
            Some(Tok::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Some(Tok::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.atom()?;
        if let Some(Tok::Pow) = self.peek().map(|t| &t.tok) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        match self.bump() {
            None => Err(ParseError::UnexpectedEnd),

            Some(Token {
                tok: Tok::Number(value),
                ..
            }) => Ok(Expr::Literal(value)),

            Some(Token {
                tok: Tok::LParen, ..
            }) => {
                let inner = self.expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }

            Some(Token {
                tok: Tok::Ident(name),
                position,
            }) => self.name(name, position),

            Some(Token { tok, position }) => Err(ParseError::UnexpectedToken {
                found: tok.describe(),
                position,
            }),
        }
    }

    /// Resolves an identifier: the bound variable, a constant, or an
    /// allow-listed function call. Everything else is rejected here.
    fn name(&mut self, name: String, _position: usize) -> Result<Expr, ParseError> {
        if name == "x" {
            return Ok(Expr::Variable);
        }

        if let Some(value) = builtins::constant(&name) {
            return Ok(Expr::Literal(value));
        }

        if let Some(func) = Builtin::lookup(&name) {
            if !matches!(self.peek().map(|t| &t.tok), Some(Tok::LParen)) {
                return Err(ParseError::BareFunction { name: func.name() });
            }
            self.pos += 1;
            let args = self.args()?;
            if args.len() != func.arity() {
                return Err(ParseError::WrongArity {
                    name: func.name(),
                    expected: func.arity(),
                    got: args.len(),
                });
            }
            return Ok(Expr::Call { func, args });
        }

        Err(ParseError::UnknownName { name })
    }

    /// Comma-separated argument list; the opening paren is consumed.
    fn args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = vec![self.expr()?];
        while let Some(Tok::Comma) = self.peek().map(|t| &t.tok) {
            self.pos += 1;
            args.push(self.expr()?);
        }
        self.expect_rparen()?;
        Ok(args)
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(Token {
                tok: Tok::RParen, ..
            }) => Ok(()),
            Some(Token { tok, position }) => Err(ParseError::UnexpectedToken {
                found: tok.describe(),
                position,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
