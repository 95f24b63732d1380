//! Root-finding error types.
//!
//! One shared [`MethodError`] serves all six solvers: the degenerate
//! conditions (same-sign bracket, zero denominator, zero derivative,
//! zero delta) are the same kinds across methods, and evaluation
//! failures from the user expression propagate through transparently.
//!
//! Non-convergence within `max_iter` is *not* represented here. A
//! solver that exhausts its budget returns its best estimate as data;
//! only conditions that make the next step meaningless are errors.

use crate::evaluator::EvalError;
use thiserror::Error;

/// Errors that abort a single solve call.
///
/// Fatal to that call only: no other invocation shares state with it,
/// so nothing else is affected.
#[derive(Debug, Error)]
pub enum MethodError {
    /// The user expression was undefined at a point the iteration
    /// reached; surfaced verbatim, never retried.
    #[error(transparent)]
    Evaluation(#[from] EvalError),

    #[error("invalid bracket [{a}, {b}]: f(a) and f(b) must have opposite signs")]
    InvalidBracket { a: f64, b: f64 },

    #[error("zero denominator at iteration {iteration}; choose different initial guesses or delta")]
    ZeroDenominator { iteration: usize },

    #[error("derivative is zero at x={x}; Newton-Raphson cannot proceed")]
    ZeroDerivative { x: f64 },

    #[error("delta must be non-zero for the modified secant method; got {delta}")]
    InvalidParameter { delta: f64 },
}
