use super::algorithms::Algorithm;
use super::common::{open_bracket, Evaluator};
use super::config::SolverCfg;
use super::errors::{ConfigError, RootFindingError};
use super::report::{emit, SolverResult, Termination};
use super::signs::same_sign;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Calculates midpoint of [a, b]
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + 0.5 * (b - a)
}


/// Theoretical number of bisection iterations needed to bring the
/// half-width of `[a, b]` below `tol`.
///
/// `ceil(log2(|b - a| / tol))`, at least `1` since a midpoint is always
/// evaluated. [`bisection`] hits this count exactly unless a midpoint lands
/// on an exact root or `|b - a| / tol` is a power of two.
///
/// # Errors
/// - [`ConfigError::InvalidTolerance`] (wrapped) : `tol` <= 0 or non-finite
pub fn theoretical_iterations(a: f64, b: f64, tol: f64) -> Result<usize, RootFindingError> {
    if !(tol.is_finite() && tol > 0.0) {
        return Err(ConfigError::InvalidTolerance { got: tol }.into());
    }
    let ratio = (b - a).abs() / tol;
    if ratio <= 1.0 {
        return Ok(1);
    }
    Ok((ratio.log2().ceil() as usize).max(1))
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// `func` must be continuous on `[a, b]` with `func(a)` and `func(b)` of
/// opposite signs. The endpoints may be given in either order.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - First bracket endpoint. Must be finite.
/// ├ `b`    - Second bracket endpoint. Must be finite.
/// └ `cfg`  - [`SolverCfg`] with `tolerance` on the half-width and `max_iter`.
///
/// # Returns
///
/// [`SolverResult`] with
/// ├ `root`        : last midpoint
/// ├ `iterations`  : midpoints evaluated
/// ├ `final_error` : half-width of the bracket the last midpoint split
/// ├ `converged`   : `false` only on [`Termination::IterationLimit`]
/// └ `termination` : [`Termination::ToleranceReached`], [`Termination::ExactRoot`]
///                   or [`Termination::IterationLimit`]
///
/// On iteration limit the last midpoint is still returned as the best
/// estimate.
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidBracket`]      - `func(a) * func(b) >= 0`, nothing iterated.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
pub fn bisection<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<SolverResult, RootFindingError>
where F: FnMut(f64) -> f64 {
    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut eval    = Evaluator::new(func);
    let (mut fa, _) = open_bracket(&mut eval, a, b)?;

    let mut p   = midpoint(a, b);
    let mut err = (0.5 * (b - a)).abs();
    let mut termination = Termination::IterationLimit;
    let mut iterations  = max_iter;

    for iter in 1..=max_iter {
        p   = midpoint(a, b);
        err = (0.5 * (b - a)).abs();
        let fp = eval.eval(p)?;
        trace!(iter, a, b, p, fp, "bisection step");

        if fp == 0.0 {
            termination = Termination::ExactRoot;
            iterations  = iter;
            break;
        }
        if err < tol {
            termination = Termination::ToleranceReached;
            iterations  = iter;
            break;
        }

        // keep the half that still changes sign
        if same_sign(fa, fp) {
            a  = p;
            fa = fp;
        } else {
            b = p;
        }
    }

    let result = SolverResult::finished(
        ALGORITHM,
        termination,
        p,
        iterations,
        err,
        eval.evals(),
    );
    emit(&result, &cfg);
    Ok(result)
}
