//! Bisection method.

use super::errors::MethodError;
use super::report::{IterationRecord, MethodResult};
use super::signs::brackets_root;
use crate::evaluator::EvalError;

/// Finds a root of `func` on the bracket `[a, b]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Each step halves the bracket at the midpoint `c`, keeping whichever
/// half still spans the sign change: `[a, c]` if `f(a) * f(c) < 0`,
/// `[c, b]` otherwise.
///
/// # Arguments
/// - `func`     : function whose root is sought; may fail at a given `x`
/// - `a`, `b`   : bracket bounds with `f(a) * f(b) < 0`
/// - `tol`      : tolerance; positivity is the caller's responsibility
/// - `max_iter` : iteration cap; exhausting it is not an error
///
/// # Returns
/// [`MethodResult`] with one [`IterationRecord`] per midpoint, error
/// metric `|b - a| / 2`
/// - stops when `error < tol` or `|f(c)| < tol`
/// - on exhaustion, the last midpoint with `iterations_used = max_iter`
///
/// # Errors
/// - [`MethodError::InvalidBracket`] : `f(a) * f(b) >= 0`, raised
///   before any iteration runs
/// - [`MethodError::Evaluation`]     : `func` undefined at a point the
///   iteration reached; propagated verbatim
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<MethodResult, MethodError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    let mut fa = func(a)?;
    let fb = func(b)?;
    if !brackets_root(fa, fb) {
        return Err(MethodError::InvalidBracket { a, b });
    }

    let mut iterations = Vec::new();
    let mut c = a;
    let mut error = f64::INFINITY;
    for iteration in 1..=max_iter {
        c = a + (b - a) * 0.5;
        let fc = func(c)?;
        error = (b - a).abs() * 0.5;
        iterations.push(IterationRecord {
            iteration,
            x_n: c,
            f_x_n: fc,
            error,
        });

        if error < tol || fc.abs() < tol {
            return Ok(MethodResult {
                iterations,
                root: c,
                error,
                iterations_used: iteration,
            });
        }

        // keep the half that still spans the sign change
        if brackets_root(fa, fc) {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    Ok(MethodResult {
        iterations,
        root: c,
        error,
        iterations_used: max_iter,
    })
}
