//! Regula falsi (false position) method.

use super::errors::MethodError;
use super::report::{IterationRecord, MethodResult};
use super::signs::brackets_root;
use crate::evaluator::EvalError;

/// Finds a root of `func` on the bracket `[a, b]` using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Instead of the midpoint, each step takes the x-intercept of the
/// secant through `(a, f(a))` and `(b, f(b))`:
/// `c = (a*f(b) - b*f(a)) / (f(b) - f(a))`, then shrinks the bracket
/// exactly like bisection. The denominator cannot vanish while the
/// endpoints have opposite signs.
///
/// # Arguments
/// - `func`     : function whose root is sought; may fail at a given `x`
/// - `a`, `b`   : bracket bounds with `f(a) * f(b) < 0`
/// - `tol`      : tolerance; positivity is the caller's responsibility
/// - `max_iter` : iteration cap; exhausting it is not an error
///
/// # Returns
/// [`MethodResult`] with one [`IterationRecord`] per step. The error
/// metric is the residual `|f(c)|`, so here the displacement and
/// residual stopping conditions coincide
/// - stops when `|f(c)| < tol`
/// - on exhaustion, the last intercept with `iterations_used = max_iter`
///
/// # Errors
/// - [`MethodError::InvalidBracket`] : `f(a) * f(b) >= 0`, raised
///   before any iteration runs
/// - [`MethodError::Evaluation`]     : `func` undefined at a point the
///   iteration reached; propagated verbatim
pub fn regula_falsi<F>(
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
    let mut fb = func(b)?;
    if !brackets_root(fa, fb) {
        return Err(MethodError::InvalidBracket { a, b });
    }

    let mut iterations = Vec::new();
    let mut c = a;
    let mut error = f64::INFINITY;
    for iteration in 1..=max_iter {
        c = (a * fb - b * fa) / (fb - fa);
        let fc = func(c)?;
        error = fc.abs();
        iterations.push(IterationRecord {
            iteration,
            x_n: c,
            f_x_n: fc,
            error,
        });

        if error < tol {
            return Ok(MethodResult {
                iterations,
                root: c,
                error,
                iterations_used: iteration,
            });
        }

        // same bracket replacement as bisection
        if brackets_root(fa, fc) {
            b = c;
            fb = fc;
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
