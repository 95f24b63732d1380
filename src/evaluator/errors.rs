//! Expression evaluator error types.
//!
//! [`ParseError`] : the expression string is rejected before any
//! evaluation happens (bad syntax, empty input, names outside the
//! allow-list).
//!
//! [`EvalError`]  : a parsed expression is undefined at a specific `x`
//! (math-domain violation, zero divisor, complex result). Carries the
//! triggering `x` so a solver can report where its iteration wandered.

use thiserror::Error;

/// Parse-time rejection of a user expression.
///
/// Raised before any iteration runs; never retried internally.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expression cannot be empty")]
    EmptyExpression,

    #[error("unexpected character '{found}' at byte {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("invalid number literal '{literal}' at byte {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token '{found}' at byte {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unknown name '{name}': only x, allow-listed math functions, and pi/e/tau are available")]
    UnknownName { name: String },

    #[error("'{name}' expects {expected} argument(s), got {got}")]
    WrongArity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("'{name}' is a function and must be called, e.g. {name}(x)")]
    BareFunction { name: &'static str },
}

/// Call-time failure of a parsed expression at a concrete `x`.
///
/// Only genuine domain violations are errors. Results that are merely
/// infinite or NaN by IEEE arithmetic (overflow, `inf - inf`) are
/// returned as-is; detecting non-finite behavior is the solver's job.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("math domain error at x={x}: {name}({arg}) is undefined")]
    DomainError {
        name: &'static str,
        arg: f64,
        x: f64,
    },

    #[error("division by zero at x={x}")]
    DivisionByZero { x: f64 },

    #[error("non-real result at x={x}: ({base})^({exponent}) is complex; real value expected")]
    NonRealResult { base: f64, exponent: f64, x: f64 },
}
