//! Fixed-point iteration.

use super::errors::MethodError;
use super::report::{IterationRecord, MethodResult};
use crate::evaluator::EvalError;

/// Finds a fixed point `x* = g(x*)` by
/// [direct iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration):
/// `x_{n+1} = g(x_n)`.
///
/// The caller rewrites `f(x) = 0` as `x = g(x)` beforehand; the fixed
/// point of `g` is then a root of `f`. Convergence requires `g` to be
/// contractive near the fixed point, which this solver does not check.
///
/// Field-meaning variance: the record's `f_x_n` holds the displacement
/// `g(x_n) - x_n` rather than a function value. The displacement is
/// the residual of `x = g(x)`, which is the quantity that actually
/// goes to zero here.
///
/// # Arguments
/// - `gfunc`    : iteration function `g`; may fail at a given `x`
/// - `x0`       : initial guess
/// - `tol`      : tolerance; positivity is the caller's responsibility
/// - `max_iter` : iteration cap; exhausting it is not an error
///
/// # Returns
/// [`MethodResult`] with one [`IterationRecord`] per step, error
/// metric `|x_{n+1} - x_n|`
/// - stops when `error < tol` (there is no separate residual check;
///   displacement and residual are the same number up to sign)
/// - on exhaustion, the last estimate with `iterations_used = max_iter`
///
/// # Errors
/// - [`MethodError::Evaluation`] : `gfunc` undefined at a point the
///   iteration reached; propagated verbatim
pub fn fixed_point<G>(
    mut gfunc: G,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<MethodResult, MethodError>
where
    G: FnMut(f64) -> Result<f64, EvalError>,
{
    let mut current = x0;
    let mut iterations = Vec::new();
    let mut error = f64::INFINITY;

    for iteration in 1..=max_iter {
        let next = gfunc(current)?;
        let displacement = next - current;
        error = displacement.abs();
        iterations.push(IterationRecord {
            iteration,
            x_n: next,
            f_x_n: displacement,
            error,
        });

        if error < tol {
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
