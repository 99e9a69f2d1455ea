//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : per-call failures
//! │   ├ non-finite endpoints or seeds
//! │   ├ no strict sign change at entry
//! │   ├ non-finite function evaluation
//! │   ├ zero secant denominator
//! │   └ invalid configuration (wrapped [`ConfigError`])
//! │
//! └ [`ConfigError`]      : rejected [`SolverCfg`](super::config::SolverCfg) values
//!
//! Running out of iterations is not an error: it is reported on the
//! returned [`SolverResult`](super::report::SolverResult) with
//! `converged == false`.

use thiserror::Error;


/// Root-finding runtime errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("degenerate secant step: f(p0) == f(p1) at p0={p0}, p1={p1}")]
    DegenerateSecantStep { p0: f64, p1: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}


/// Configuration errors.
///
/// ┌ `tolerance` must be finite and > 0
/// └ `max_iter` must be >= 1
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid `tolerance`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
