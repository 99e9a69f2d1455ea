use super::algorithms::Algorithm;
use super::bisection::midpoint;
use super::common::{open_bracket, Evaluator};
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{emit, SolverResult, Termination};
use super::signs::sign_change;
use tracing::trace;

const ALGORITHM: Algorithm = Algorithm::Brent;

/// Threshold below which two function values, or two consecutive step
/// widths, are treated as equal.
pub const EPS2: f64 = 2.0 * f64::EPSILON;


/// Checks degeneracies in iqi and step history.
#[inline]
fn near_equal(x: f64, y: f64) -> bool {
    (x - y).abs() <= EPS2
}


/// Inverse quadratic interpolation through `(a, fa)`, `(b, fb)`, `(c, fc)`
/// in Lagrange form. Callers ensure `fa`, `fb`, `fc` are pairwise distinct.
#[inline]
fn iqi(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    (c, fc): (f64, f64),
) -> f64 {
    a * fb * fc / ((fa - fb) * (fa - fc))
        + b * fa * fc / ((fb - fa) * (fb - fc))
        + c * fa * fb / ((fc - fa) * (fc - fb))
}


/// Secant intercept through `(a, fa)` and `(b, fb)`. The bracket invariant
/// keeps `fa` and `fb` of opposite sign, so the denominator is non-zero.
#[inline]
fn secant_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> f64 {
    b - fb * (b - a) / (fb - fa)
}


/// Brent's "interior window" test for candidate `s`.
///
/// Checks that `s` lies strictly inside the open interval
/// `((3a + b)/4, b)` when `a < b` (mirrored when `a > b`).
/// NaN or infinite candidates always fail.
#[inline]
fn interior_window_ok(a: f64, b: f64, s: f64) -> bool {
    let lower = (3.0 * a + b) / 4.0;
    if a < b {
        s > lower && s < b
    } else {
        s < lower && s > b
    }
}


/// Finds a root using Brent's method (bisection + secant + inverse quadratic interpolation).
///
/// This method assumes that the function is continuous on the interval `[a, b]`
/// and that `f(a)` and `f(b)` have opposite signs, guaranteeing a root exists
/// within the interval. The endpoints may be given in either order.
///
/// # Arguments
/// - `func` : function to evaluate
/// - `a`    : bracket endpoint (finite)
/// - `b`    : bracket endpoint (finite)
/// - `cfg`  : [`SolverCfg`], `tolerance` applies to the bracket width `|b - a|`
///
/// # Returns
/// [`SolverResult`] with
/// - `root`        : `b`, the endpoint with the smaller `|f|`
/// - `iterations`  : interpolation or bisection steps taken
/// - `final_error` : bracket width `|b - a|` at termination
/// - `termination` : [`Termination::ToleranceReached`], [`Termination::ExactRoot`]
///                   or [`Termination::IterationLimit`]
///
/// On iteration limit `b` is still returned as the best estimate.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a`/`b` non-finite
/// - [`RootFindingError::InvalidBracket`]      : f(a) and f(b) do not strictly change sign
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
///
/// # Notes
/// - Each step proposes an inverse quadratic interpolation when
///   `f(a)`, `f(b)`, `f(c)` are pairwise distinct beyond [`EPS2`], and a
///   secant step otherwise.
/// - The proposal is replaced by the midpoint when it falls outside
///   `((3a + b)/4, b)`, when it moves at least half as far as the step
///   before last, or when that earlier step had already stalled below
///   [`EPS2`].
/// - `|b - a|` never increases from one iteration to the next.
pub fn brent<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<SolverResult, RootFindingError>
where F: FnMut(f64) -> f64 {
    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut eval         = Evaluator::new(func);
    let (mut fa, mut fb) = open_bracket(&mut eval, a, b)?;

    // ensure |fb| <= |fa|
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c  = a;
    let mut fc = fa;
    let mut d  = a;
    let mut used_bisection = true;
    let mut iterations     = 0;

    let termination = loop {
        if (b - a).abs() < tol {
            break Termination::ToleranceReached;
        }
        if iterations == max_iter {
            break Termination::IterationLimit;
        }
        iterations += 1;

        let mut p = if !near_equal(fa, fc) && !near_equal(fb, fc) && !near_equal(fa, fb) {
            iqi((a, fa), (b, fb), (c, fc))
        } else {
            secant_intercept((a, fa), (b, fb))
        };

        let step   = (p - b).abs();
        let gap_bc = (b - c).abs();
        let gap_cd = (c - d).abs();

        let reject = !interior_window_ok(a, b, p)
            || (used_bisection && step >= 0.5 * gap_bc)
            || (!used_bisection && step >= 0.5 * gap_cd)
            || (used_bisection && gap_bc < EPS2)
            || (!used_bisection && gap_cd < EPS2);

        if reject {
            p = midpoint(a, b);
        }
        used_bisection = reject;

        let fp = eval.eval(p)?;
        trace!(iter = iterations, a, b, p, fp, bisection = reject, "brent step");

        // brent rotation
        d  = c;
        c  = b;
        fc = fb;

        if sign_change(fa, fp) {
            b  = p;
            fb = fp;
        } else {
            a  = p;
            fa = fp;
        }

        // maintain |fb| <= |fa|
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        if fb == 0.0 {
            break Termination::ExactRoot;
        }
    };

    let result = SolverResult::finished(
        ALGORITHM,
        termination,
        b,
        iterations,
        (b - a).abs(),
        eval.evals(),
    );
    emit(&result, &cfg);
    Ok(result)
}
