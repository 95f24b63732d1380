//! Modified secant method.

use super::errors::MethodError;
use super::report::{IterationRecord, MethodResult};
use crate::evaluator::EvalError;

/// Finds a root of `func` using the modified secant method, a
/// single-guess variant of the secant update that replaces the second
/// point with a relative perturbation `x_n + delta * x_n`:
///
/// `x_{n+1} = x_n - delta * x_n * f(x_n) / (f(x_n + delta*x_n) - f(x_n))`
///
/// # Arguments
/// - `func`     : function whose root is sought; may fail at a given `x`
/// - `x0`       : initial guess
/// - `delta`    : relative perturbation, must be non-zero
/// - `tol`      : tolerance; positivity is the caller's responsibility
/// - `max_iter` : iteration cap; exhausting it is not an error
///
/// # Returns
/// [`MethodResult`] with one [`IterationRecord`] per step, error
/// metric `|x_{n+1} - x_n|`
/// - stops when `error < tol` or `|f(x_{n+1})| < tol`
/// - on exhaustion, the last estimate with `iterations_used = max_iter`
///
/// # Errors
/// - [`MethodError::InvalidParameter`] : `delta == 0`, raised before
///   any iteration runs
/// - [`MethodError::ZeroDenominator`]  : the perturbed difference
///   `f(x_n + delta*x_n) - f(x_n)` vanished; adjust `delta` or `x0`
/// - [`MethodError::Evaluation`]       : `func` undefined at a point
///   the iteration reached; propagated verbatim
///
/// # Notes
/// The perturbation is relative, so `x_n == 0` makes the denominator
/// degenerate (`x_n + delta*x_n == x_n`); that surfaces as
/// [`MethodError::ZeroDenominator`] rather than a special case.
pub fn modified_secant<F>(
    mut func: F,
    x0: f64,
    delta: f64,
    tol: f64,
    max_iter: usize,
) -> Result<MethodResult, MethodError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    if delta == 0.0 {
        return Err(MethodError::InvalidParameter { delta });
    }

    let mut current = x0;
    let mut iterations = Vec::new();
    let mut error = f64::INFINITY;

    for iteration in 1..=max_iter {
        let f_current = func(current)?;
        let denominator = func(current + delta * current)? - f_current;
        if denominator == 0.0 {
            return Err(MethodError::ZeroDenominator { iteration });
        }

        let next = current - (delta * current * f_current) / denominator;
        let f_next = func(next)?;
        error = (next - current).abs();
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

        current = next;
    }

    Ok(MethodResult {
        iterations,
        root: current,
        error,
        iterations_used: max_iter,
    })
}
