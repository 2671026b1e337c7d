use thiserror::Error;

/// Configuration shared by the chord and Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("eps must be finite and positive, got {0}")]
    Eps(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1e-3,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and strictly positive.
    pub fn new(eps: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps(eps));
        }

        Ok(Self { eps, max_iters })
    }

    /// Returns the convergence tolerance on consecutive estimates.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the maximum number of iterations before giving up.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
