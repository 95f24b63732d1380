//! Zero-of-functions (ZOF) solver core.
//!
//! Two independent components, composed by whatever front end collects
//! the parameters:
//! - [`evaluator`] : parses a restricted math expression string into a
//!   callable function of one real variable, rejecting everything
//!   outside an allow-listed vocabulary
//! - [`methods`]   : six iterative root-finding algorithms, each
//!   returning a full per-iteration trace alongside the final estimate
//!
//! The solvers consume functions only through the call contract
//! `FnMut(f64) -> Result<f64, EvalError>`, so plain closures work in
//! place of parsed expressions.

pub mod evaluator;
pub mod methods;
