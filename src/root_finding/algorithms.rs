//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and [`Algorithm::solve`] to run any of them through one entry point.

use super::bisection::bisection;
use super::brent::brent;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::SolverResult;
use super::secant::secant;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`] : bracketing, interval halving
/// - [`Algorithm::Secant`]    : open, two-point linear interpolation
/// - [`Algorithm::Brent`]     : compound, interpolation guarded by bisection
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bisection,
    Secant,
    Brent,
}

impl Algorithm {
    /// Every supported method, in order of increasing sophistication.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bisection, Algorithm::Secant, Algorithm::Brent];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Secant    => "secant",
            Algorithm::Brent     => "brent",
        }
    }

    /// Heading used by the human-readable summary.
    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::Bisection => "Bisection method",
            Algorithm::Secant    => "Secant method",
            Algorithm::Brent     => "Brent's method",
        }
    }

    /// What `final_error` measures for this method.
    ///
    /// - bisection : half-width of the last bracket
    /// - secant    : relative step `|(p - p1) / p1|`
    /// - brent     : width `|b - a|` of the last bracket
    pub const fn error_label(self) -> &'static str {
        match self {
            Algorithm::Secant => "relative error",
            _                 => "error",
        }
    }

    /// Runs this method on `func` with the pair `(a, b)`.
    ///
    /// For [`Algorithm::Secant`] the pair is used as the two seed points.
    pub fn solve<F>(
        self,
        func: F,
        a: f64,
        b: f64,
        cfg: SolverCfg,
    ) -> Result<SolverResult, RootFindingError>
    where F: FnMut(f64) -> f64 {
        match self {
            Algorithm::Bisection => bisection(func, a, b, cfg),
            Algorithm::Secant    => secant(func, a, b, cfg),
            Algorithm::Brent     => brent(func, a, b, cfg),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
