//! Secant method.

use super::errors::MethodError;
use super::report::{IterationRecord, MethodResult};
use crate::evaluator::EvalError;

/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Update: `x_{n+1} = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))`, then
/// the window shifts: `(x0, x1) <- (x1, x_{n+1})`. No bracket is
/// required, so convergence is not guaranteed; a flat stretch where
/// `f(x1) == f(x0)` is a hard stop.
///
/// # Arguments
/// - `func`     : function whose root is sought; may fail at a given `x`
/// - `x0`, `x1` : the two initial guesses
/// - `tol`      : tolerance; positivity is the caller's responsibility
/// - `max_iter` : iteration cap; exhausting it is not an error
///
/// # Returns
/// [`MethodResult`] with one [`IterationRecord`] per step, error
/// metric `|x_{n+1} - x1|`
/// - stops when `error < tol` or `|f(x_{n+1})| < tol`
/// - on exhaustion, the last estimate with `iterations_used = max_iter`
///
/// # Errors
/// - [`MethodError::ZeroDenominator`] : `f(x1) - f(x0) == 0` at some
///   iteration
/// - [`MethodError::Evaluation`]      : `func` undefined at a point the
///   iteration reached; propagated verbatim
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    tol: f64,
    max_iter: usize,
) -> Result<MethodResult, MethodError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    let mut prev = x0;
    let mut curr = x1;
    let mut f_prev = func(prev)?;
    let mut f_curr = func(curr)?;

    let mut iterations = Vec::new();
    let mut error = f64::INFINITY;
    for iteration in 1..=max_iter {
        let denominator = f_curr - f_prev;
        if denominator == 0.0 {
            return Err(MethodError::ZeroDenominator { iteration });
        }

        let next = curr - f_curr * (curr - prev) / denominator;
        let f_next = func(next)?;
        error = (next - curr).abs();
        iterations.push(IterationRecord {
            iteration,
            x_n: next,
            f_x_n: f_next,
            error,
        });

        if error < tol || f_next.abs() < tol {
            return Ok(MethodResult {
                iterations,
                root: next,
                error,
                iterations_used: iteration,
            });
        }

        prev = curr;
        f_prev = f_curr;
        curr = next;
        f_curr = f_next;
    }

    Ok(MethodResult {
        iterations,
        root: curr,
        error,
        iterations_used: max_iter,
    })
}
