//! Configuration for the evolution-strategy runner.

use crate::error::{Error, Result};

/// How the next generation's parents are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// (mu, lambda): parents are the best `mu` of the offspring alone.
    ///
    /// The parent set may regress between generations; the all-time best
    /// tracked by the runner cannot.
    #[default]
    MuCommaLambda,

    /// (mu + lambda): parents are the best `mu` of the previous parents
    /// and the offspring pooled together, so the parent set never
    /// regresses.
    MuPlusLambda,
}

/// Parameters of a (mu, lambda) evolution-strategy run.
///
/// # Defaults
///
/// ```
/// use evocore::es::{EsConfig, Replacement};
///
/// let config = EsConfig::new();
/// assert_eq!(config.mu, 10);
/// assert_eq!(config.lambda, 100);
/// assert_eq!(config.max_evaluations, 25_000);
/// assert_eq!(config.replacement, Replacement::MuCommaLambda);
/// assert!(config.parallel);
/// assert_eq!(config.seed, None);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evocore::es::{EsConfig, Replacement};
///
/// let config = EsConfig::new()
///     .with_mu(5)
///     .with_lambda(25)
///     .with_max_evaluations(10_000)
///     .with_replacement(Replacement::MuPlusLambda)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.offspring_per_parent(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EsConfig {
    /// Number of parents kept between generations.
    pub mu: usize,

    /// Number of offspring produced per generation. Must be a multiple of
    /// `mu`: every parent yields exactly `lambda / mu` children.
    pub lambda: usize,

    /// Evaluation budget. Checked between generations, so the final
    /// generation may overshoot it; the run performs
    /// `mu + k * lambda` evaluations for the smallest `k` reaching the
    /// budget.
    pub max_evaluations: usize,

    /// Parent replacement scheme.
    pub replacement: Replacement,

    /// Evaluate each generation's offspring across threads.
    pub parallel: bool,

    /// Seed for the run's random stream. `None` draws a fresh seed, making
    /// the run non-reproducible.
    pub seed: Option<u64>,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            mu: 10,
            lambda: 100,
            max_evaluations: 25_000,
            replacement: Replacement::MuCommaLambda,
            parallel: true,
            seed: None,
        }
    }
}

impl EsConfig {
    /// Creates a configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parent count.
    pub fn with_mu(mut self, mu: usize) -> Self {
        self.mu = mu;
        self
    }

    /// Sets the offspring count per generation.
    pub fn with_lambda(mut self, lambda: usize) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }

    /// Sets the parent replacement scheme.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Enables or disables parallel offspring evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Fixes the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Offspring each parent contributes per generation.
    ///
    /// # Panics
    ///
    /// Panics if `mu` is zero; [`validate`](Self::validate) rejects that
    /// configuration first.
    pub fn offspring_per_parent(&self) -> usize {
        self.lambda / self.mu
    }

    /// Checks the configuration without running anything.
    ///
    /// ```
    /// use evocore::es::EsConfig;
    ///
    /// let config = EsConfig::new().with_mu(4).with_lambda(10);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.mu == 0 {
            return Err(Error::ZeroParameter { name: "mu" });
        }
        if self.lambda == 0 {
            return Err(Error::ZeroParameter { name: "lambda" });
        }
        if self.max_evaluations == 0 {
            return Err(Error::ZeroParameter {
                name: "max_evaluations",
            });
        }
        if self.lambda % self.mu != 0 {
            return Err(Error::LambdaNotDivisible {
                mu: self.mu,
                lambda: self.lambda,
            });
        }
        Ok(())
    }
}
