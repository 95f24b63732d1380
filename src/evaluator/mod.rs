//! Restricted expression evaluator.
//!
//! Turns a user-supplied formula string such as `x**2 - 2` or
//! `cos(x) - x` into a [`Function`] of one real variable. The grammar
//! is a closed set: literals, `x`, the four arithmetic operators,
//! exponentiation, parentheses, and an allow-list of math functions
//! and constants. Nothing else parses, so an untrusted expression can
//! never reach host capabilities; this is a hand-rolled interpreter,
//! not a sandboxed general-purpose evaluator.

// parsing pipeline
pub mod errors;
pub(crate) mod ast;
pub(crate) mod builtins;
pub(crate) mod parser;
pub(crate) mod token;

pub use errors::{EvalError, ParseError};

use ast::Expr;
use std::fmt;

/// A parsed single-variable function.
///
/// Produced by [`parse`], owned by whichever solve invocation
/// requested it. Calls are pure and referentially transparent: the
/// same `x` always yields the same result, and a `Function` may be
/// called any number of times from independent invocations.
#[derive(Debug, Clone)]
pub struct Function {
    source: String,
    expr: Expr,
}

impl Function {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    /// [`EvalError`] when the expression is undefined at this `x`
    /// (math-domain violation, zero divisor, complex result). Infinite
    /// or NaN results from plain IEEE arithmetic are returned as-is.
    pub fn call(&self, x: f64) -> Result<f64, EvalError> {
        self.expr.eval(x)
    }

    /// The trimmed expression string this function was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Parses `expression` into a callable [`Function`].
///
/// Parse cost is paid once here; the returned function is cheap to
/// call repeatedly. All names are resolved against the allow-list at
/// parse time, so expressions like `os.system('x')` or `y + 1` are
/// rejected before anything is evaluated.
///
/// # Errors
/// [`ParseError`] for empty/whitespace-only input, syntax errors, and
/// names outside the allow-listed vocabulary.
pub fn parse(expression: &str) -> Result<Function, ParseError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens = token::tokenize(trimmed)?;
    let expr = parser::parse_tokens(&tokens)?;

    Ok(Function {
        source: trimmed.to_string(),
        expr,
    })
}
