//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] holds the universal fields, passed by value into every solver
//! ├ `tolerance` : convergence threshold (width, half-width or relative step)
//! ├ `max_iter`  : hard iteration cap
//! └ `verbose`   : emit a summary through `tracing` on termination
//!
//! [`SolverCfg::new`] initializes configuration with default values. The
//! `set_*` setters validate their argument so a constructed config is
//! always usable.

use super::errors::ConfigError;


pub const DEFAULT_TOLERANCE : f64   = 1e-8;
pub const DEFAULT_MAX_ITER  : usize = 500;
pub const DEFAULT_VERBOSE   : bool  = false;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tolerance : f64,
    max_iter  : usize,
    verbose   : bool,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : DEFAULT_MAX_ITER,
            verbose   : DEFAULT_VERBOSE,
        }
    }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self)  -> usize { self.max_iter }
    #[inline] #[must_use] pub fn verbose(&self)   -> bool  { self.verbose }

    /// # Errors
    /// - [`ConfigError::InvalidTolerance`] : `v` <= 0 or non-finite
    pub fn set_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    /// # Errors
    /// - [`ConfigError::InvalidMaxIter`] : `v` == 0
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    #[must_use]
    pub fn set_verbose(mut self, v: bool) -> Self {
        self.verbose = v;
        self
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self::new()
    }
}
