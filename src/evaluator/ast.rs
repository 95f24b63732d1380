//! Typed expression AST, evaluated by structural recursion.
//!
//! Node kinds cover exactly the restricted grammar: literal,
//! the bound variable, unary negation, the five binary operators, and
//! calls to allow-listed functions. There is deliberately no node for
//! assignment, attribute access, or anything else a general-purpose
//! evaluator would have.

use super::builtins::{self, Builtin};
use super::errors::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone)]
pub(crate) enum Expr {
    Literal(f64),
    Variable,
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Builtin,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Evaluates the expression with the bound variable set to `x`.
    ///
    /// Pure and reentrant: no state is read or written besides the
    /// node tree itself, so repeated and concurrent calls are safe.
    pub(crate) fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Literal(v) => *v,
            Expr::Variable => x,
            Expr::Neg(operand) => -operand.eval(x)?,

            Expr::Binary { op, lhs, rhs } => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => {
                        if r == 0.0 {
                            return Err(EvalError::DivisionByZero { x });
                        }
                        l / r
                    }
                    BinOp::Pow => builtins::checked_pow(l, r, x)?,
                }
            }

            Expr::Call { func, args } => {
                // arity is at most 2, checked at parse time
                let mut values = [0.0_f64; 2];
                for (slot, arg) in values.iter_mut().zip(args.iter()) {
                    *slot = arg.eval(x)?;
                }
                func.apply(&values[..args.len()], x)?
            }
        };

        Ok(value)
    }
}
