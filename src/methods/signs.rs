//! Sign utilities for bracketing methods.

/// `true` when `f(a) * f(b)` is strictly negative, i.e. the pair
/// brackets at least one root.
///
/// A zero on either side is not a sign change here; an endpoint that
/// already sits on the root is caught by the residual stopping check,
/// not the bracket test. NaN on either side also fails the test.
#[inline]
pub(crate) fn brackets_root(fa: f64, fb: f64) -> bool {
    fa * fb < 0.0
}
