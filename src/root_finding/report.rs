//! Defines the [`SolverResult`] struct returned by all
//! root-finding algorithms, and its presentation.
//!
//! Formatting lives here, outside the numeric loops:
//! - `Display for SolverResult` renders the human-readable summary
//! - [`emit`] forwards it to `tracing` when the config asks for it

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use tracing::{debug, info, warn};


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The method's error measure dropped below `tolerance`.
    ToleranceReached,
    /// The objective evaluated to exactly `0.0`.
    ExactRoot,
    /// `max_iter` iterations ran without meeting `tolerance`.
    IterationLimit,
}


/// Final report returned by all root-finding algorithms.
///
/// [`SolverResult`]
/// - `root`        : root estimate (see below for non-convergence)
/// - `iterations`  : iterations performed
/// - `final_error` : error measure at termination, see [`Algorithm::error_label`]
/// - `converged`   : `true` iff tolerance was met or an exact root was hit
/// - `evaluations` : objective calls, including the two entry evaluations
/// - `termination` : why the solver stopped
/// - `algorithm`   : which method produced it
///
/// # Non-convergence
/// - bisection, brent : `root` is the best current estimate
/// - secant           : `root` is reset to `0.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    pub root        : f64,
    pub iterations  : usize,
    pub final_error : f64,
    pub converged   : bool,
    pub evaluations : usize,
    pub termination : Termination,
    pub algorithm   : Algorithm,
}

impl SolverResult {
    pub(crate) fn finished(
        algorithm   : Algorithm,
        termination : Termination,
        root        : f64,
        iterations  : usize,
        final_error : f64,
        evaluations : usize,
    ) -> Self {
        Self {
            root,
            iterations,
            final_error,
            converged: termination != Termination::IterationLimit,
            evaluations,
            termination,
            algorithm,
        }
    }
}

impl std::fmt::Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.algorithm.error_label();
        writeln!(f, "{} results:", self.algorithm.title())?;
        writeln!(f, "    Root: x = {:.12}", self.root)?;
        writeln!(f, "    Iterations: {}", self.iterations)?;
        writeln!(f, "    {}{}: {:e}", label[..1].to_uppercase(), &label[1..], self.final_error)?;
        write!(f, "    Converged: {}", self.converged)
    }
}


/// Records the outcome of a solver run.
///
/// Always emits a `debug` event with the result fields. With
/// `cfg.verbose()` it also logs the summary at `info` level, preceded by a
/// `warn` when the iteration budget ran out.
pub fn emit(result: &SolverResult, cfg: &SolverCfg) {
    debug!(
        algorithm   = %result.algorithm,
        root        = result.root,
        iterations  = result.iterations,
        final_error = result.final_error,
        evaluations = result.evaluations,
        converged   = result.converged,
        "solver finished"
    );

    if !cfg.verbose() {
        return;
    }
    if !result.converged {
        warn!(
            algorithm = %result.algorithm,
            max_iter  = cfg.max_iter(),
            "maximum iterations reached, solution may not be valid"
        );
    }
    info!("{result}");
}
