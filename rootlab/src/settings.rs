use rootlab_solve::equation::{Config, ConfigError, start::StartPolicy};

/// Inputs for one run of the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Interval `[a, b]` searched by both methods.
    pub bracket: [f64; 2],
    /// Tolerance on consecutive estimates.
    pub eps: f64,
    /// Iteration cap applied to every solver run.
    pub max_iters: usize,
    /// How Newton's starting endpoint is judged.
    pub start_policy: StartPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bracket: [0.0, 1.5],
            eps: 0.001,
            max_iters: 1000,
            start_policy: StartPolicy::Ieee,
        }
    }
}

impl Settings {
    /// Returns the solver config for these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive.
    pub fn solver_config(&self) -> Result<Config, ConfigError> {
        Config::new(self.eps, self.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_lab_constants() {
        let settings = Settings::default();
        assert_eq!(settings.bracket, [0.0, 1.5]);

        let config = settings.solver_config().expect("valid defaults");
        assert_eq!(config.eps(), 0.001);
        assert_eq!(config.max_iters(), 1000);
    }

    #[test]
    fn negative_eps_is_rejected() {
        let settings = Settings {
            eps: -1.0,
            ..Settings::default()
        };
        assert!(settings.solver_config().is_err());
    }
}
