//! Iteration trace types returned by every solver.
//!
//! All six methods share one record shape and one result shape; this
//! uniformity is what lets a single display path (console table, HTML,
//! JSON) serve every algorithm. Both types serialize as plain ordered
//! mappings of their fields.

use serde::Serialize;

/// One row of the iteration trace.
///
/// - `iteration` : 1-based step index
/// - `x_n`       : estimate produced by this step
/// - `f_x_n`     : function value at `x_n`; for fixed point this holds
///   the displacement `g(x_n) - x_n` instead (stated on that method)
/// - `error`     : the method's error metric for this step
///
/// Append-only: records are pushed in iteration order and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub x_n: f64,
    pub f_x_n: f64,
    pub error: f64,
}

/// Full outcome of one solve call.
///
/// Invariant: `iterations_used == iterations.len()` and equals the
/// `iteration` index of the last record. When the iteration budget is
/// exhausted without converging, `iterations_used == max_iter` and
/// `root`/`error` hold the best estimate found; that outcome is a
/// normal return, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    pub iterations: Vec<IterationRecord>,
    pub root: f64,
    pub error: f64,
    pub iterations_used: usize,
}

impl MethodResult {
    /// The final iteration record, if any step ran.
    pub fn last(&self) -> Option<&IterationRecord> {
        self.iterations.last()
    }
}
