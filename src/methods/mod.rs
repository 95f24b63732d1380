//! Root-finding engine: six iterative algorithms sharing one
//! iteration/termination protocol.
//!
//! Every solver loops from 1 to `max_iter`, produces one new scalar
//! estimate per step, appends one [`report::IterationRecord`], and
//! returns as soon as its stopping predicate holds. Exhausting the
//! budget is a normal return with the best estimate found; degenerate
//! inputs and evaluation failures are [`errors::MethodError`]s.
//!
//! Each call is self-contained and side-effect-free over its own
//! stack-local state, so concurrent solves need no coordination.

// common helpers
pub mod errors;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod fixed_point;
pub mod modified_secant;
pub mod newton;
pub mod regula_falsi;
pub mod secant;

pub use errors::MethodError;
pub use report::{IterationRecord, MethodResult};
