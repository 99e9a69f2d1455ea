//! Helpers shared by every solver.
//!
//! ┌ [`Evaluator`]   : wraps the objective, counts calls, rejects NaN/inf
//! └ [`open_bracket`]: entry contract (finite points, strict sign change)

use super::errors::RootFindingError;
use super::signs::sign_change;
use tracing::debug;


/// Objective wrapper owned by a single solver call.
pub(crate) struct Evaluator<F> {
    func  : F,
    evals : usize,
}

impl<F> Evaluator<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    /// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` is NaN or inf
    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }

    #[inline]
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}


/// Validates the entry pair and returns `(f(a), f(b))`.
///
/// Each point is evaluated exactly once. No iteration happens when the
/// check fails.
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` is NaN/inf
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(a)` or `f(b)` is NaN/inf
/// - [`RootFindingError::InvalidBracket`]      : `f(a) * f(b) >= 0`
pub(crate) fn open_bracket<F>(
    eval: &mut Evaluator<F>,
    a: f64,
    b: f64,
) -> Result<(f64, f64), RootFindingError>
where F: FnMut(f64) -> f64 {
    if !(a.is_finite() && b.is_finite()) {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let fa = eval.eval(a)?;
    let fb = eval.eval(b)?;
    if !sign_change(fa, fb) {
        debug!(a, b, fa, fb, "rejected bracket without sign change");
        return Err(RootFindingError::InvalidBracket { a, b, fa, fb });
    }

    Ok((fa, fb))
}
