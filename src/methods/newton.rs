//! Newton-Raphson method.

use super::errors::MethodError;
use super::report::{IterationRecord, MethodResult};
use crate::evaluator::EvalError;

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with a caller-supplied derivative.
///
/// Update: `x_{n+1} = x_n - f(x_n) / f'(x_n)`. The derivative comes in
/// through the same call contract as the function itself (typically a
/// second parsed expression); there is no symbolic or finite-difference
/// differentiation here.
///
/// # Arguments
/// - `func`     : function whose root is sought; may fail at a given `x`
/// - `dfunc`    : its derivative, same contract
/// - `x0`       : initial guess
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
/// - [`MethodError::ZeroDerivative`] : `f'(x_n) == 0` at some iterate
/// - [`MethodError::Evaluation`]     : `func` or `dfunc` undefined at a
///   point the iteration reached; propagated verbatim
pub fn newton_raphson<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<MethodResult, MethodError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
    G: FnMut(f64) -> Result<f64, EvalError>,
{
    let mut current = x0;
    let mut iterations = Vec::new();
    let mut error = f64::INFINITY;

    for iteration in 1..=max_iter {
        let f_val = func(current)?;
        let d_val = dfunc(current)?;
        if d_val == 0.0 {
            return Err(MethodError::ZeroDerivative { x: current });
        }

        let next = current - f_val / d_val;
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
