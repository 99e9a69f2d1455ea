//! Scalar root-finding over a sign-change bracket.
//!
//! ┌ [`root_finding::bisection`] : interval halving, guaranteed convergence
//! ├ [`root_finding::secant`]    : two-point linear interpolation, unguarded
//! └ [`root_finding::brent`]     : inverse quadratic interpolation with secant
//!                                 and bisection fallbacks
//!
//! All three share [`root_finding::config::SolverCfg`] and return a
//! [`root_finding::report::SolverResult`].

pub mod root_finding;

pub use root_finding::algorithms::Algorithm;
pub use root_finding::config::SolverCfg;
pub use root_finding::errors::{ConfigError, RootFindingError};
pub use root_finding::report::{SolverResult, Termination};
