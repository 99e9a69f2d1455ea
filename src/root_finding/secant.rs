use super::algorithms::Algorithm;
use super::common::{open_bracket, Evaluator};
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{emit, SolverResult, Termination};
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Secant;

/// Root reported when the secant iteration runs out of budget.
pub const NON_CONVERGED_ROOT: f64 = 0.0;


/// Calculates the secant x-intercept for the line
/// connecting `(p0, fp0)` and `(p1, fp1)`
///
/// # Returns
/// - `Ok(p)` for any non-zero denominator `fp1 - fp0`, however small
/// - `Err(DegenerateSecantStep)` if `fp1 == fp0`
#[inline]
pub(crate) fn secant_step(
    (p0, fp0): (f64, f64),
    (p1, fp1): (f64, f64),
) -> Result<f64, RootFindingError> {
    let denom = fp1 - fp0;
    if denom == 0.0 {
        return Err(RootFindingError::DegenerateSecantStep { p0, p1 });
    }
    Ok(p1 - (p1 - p0) * fp1 / denom)
}


/// Relative step `|(p - p1) / p1|`, absolute when `p1 == 0`.
#[inline]
fn relative_error(p: f64, p1: f64) -> f64 {
    if p1 == 0.0 {
        (p - p1).abs()
    } else {
        ((p - p1) / p1).abs()
    }
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `p0`   : First seed point, finite
/// - `p1`   : Second seed point, finite
/// - `cfg`  : [`SolverCfg`], `tolerance` applies to the relative step
///
/// The seeds must satisfy `func(p0) * func(p1) < 0` like the bracketing
/// methods, although the iterates are free to leave `[p0, p1]` afterwards.
///
/// # Returns
/// [`SolverResult`] with
/// - `root`        : the iterate that met `tolerance`, or
///                   [`NON_CONVERGED_ROOT`] on [`Termination::IterationLimit`]
/// - `iterations`  : secant steps computed
/// - `final_error` : last relative step `|(p - p1) / p1|`
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]        : `p0` or `p1` is NaN/inf
/// - [`RootFindingError::InvalidBracket`]       : `func(p0) * func(p1) >= 0`
/// - [`RootFindingError::NonFiniteEvaluation`]  : `func(x)` produced NaN/inf
/// - [`RootFindingError::DegenerateSecantStep`] : two consecutive iterates
///   have equal function values
///
/// # Warning
/// - There is no bracket-safety fallback. A near-zero denominator is used as
///   is and can throw the iterate far away; the run then either diverges
///   to [`Termination::IterationLimit`] or fails with
///   [`RootFindingError::NonFiniteEvaluation`]. Use [`brent`](super::brent::brent)
///   when convergence must be guaranteed.
pub fn secant<F>(
    func: F,
    mut p0: f64,
    mut p1: f64,
    cfg: SolverCfg,
) -> Result<SolverResult, RootFindingError>
where F: FnMut(f64) -> f64 {
    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut eval           = Evaluator::new(func);
    let (mut fp0, mut fp1) = open_bracket(&mut eval, p0, p1)?;

    let mut err = f64::INFINITY;
    for iter in 1..=max_iter {
        let p = secant_step((p0, fp0), (p1, fp1))?;
        err   = relative_error(p, p1);
        trace!(iter, p0, p1, p, err, "secant step");

        if err < tol {
            let result = SolverResult::finished(
                ALGORITHM,
                Termination::ToleranceReached,
                p,
                iter,
                err,
                eval.evals(),
            );
            emit(&result, &cfg);
            return Ok(result);
        }

        let fp = eval.eval(p)?;
        p0  = p1;
        fp0 = fp1;
        p1  = p;
        fp1 = fp;
    }

    let result = SolverResult::finished(
        ALGORITHM,
        Termination::IterationLimit,
        NON_CONVERGED_ROOT,
        max_iter,
        err,
        eval.evals(),
    );
    emit(&result, &cfg);
    Ok(result)
}
