//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds every parameter of the generation loop. It is
//! validated once, at the boundary, before any candidate is built.

use super::operators::GeneticOperator;
use crate::error::{Error, Result};

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use chromagen::ga::{EvolutionConfig, GeneticOperator};
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.n_generations, 100);
/// assert_eq!(config.operator, GeneticOperator::Mutation);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use chromagen::ga::{EvolutionConfig, GeneticOperator};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(50)
///     .with_percentage_to_keep(0.2)
///     .with_operator(GeneticOperator::SinglePointCrossover)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of candidates per generation. Constant across the run.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub n_generations: usize,

    /// Fraction of the population copied unchanged into the next
    /// generation, in the open interval `(0, 1)`.
    ///
    /// The elite count is `floor(population_size * percentage_to_keep)`.
    pub percentage_to_keep: f64,

    /// Reproduction strategy, fixed for the whole run.
    pub operator: GeneticOperator,

    /// Evaluate offspring on the rayon pool.
    ///
    /// Only has an effect when the `parallel` feature is enabled. Results
    /// are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the seed actually used is reported in
    /// the run result.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            n_generations: 100,
            percentage_to_keep: 0.1,
            operator: GeneticOperator::Mutation,
            parallel: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_n_generations(mut self, n: usize) -> Self {
        self.n_generations = n;
        self
    }

    /// Sets the elite fraction. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_percentage_to_keep(mut self, ratio: f64) -> Self {
        self.percentage_to_keep = ratio;
        self
    }

    /// Sets the genetic operator.
    pub fn with_operator(mut self, operator: GeneticOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Enables or disables parallel offspring evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of candidates carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.percentage_to_keep) as usize
    }

    /// Number of parent pairs sampled each generation.
    pub fn pair_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    ///
    /// Besides range checks, this rejects sizes where the sampled parent
    /// pairs cannot fill the generation after the elites, which would
    /// otherwise only surface as [`Error::ExhaustedParents`] mid-run.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::invalid("population_size must be at least 1"));
        }
        if self.n_generations == 0 {
            return Err(Error::invalid("n_generations must be at least 1"));
        }
        if !(self.percentage_to_keep > 0.0 && self.percentage_to_keep < 1.0) {
            return Err(Error::invalid(format!(
                "percentage_to_keep must be in (0, 1), got {}",
                self.percentage_to_keep
            )));
        }
        let elites = self.elite_count();
        let pairs = self.pair_count();
        if elites + 2 * pairs < self.population_size {
            return Err(Error::ExhaustedParents {
                target: self.population_size,
                produced: elites + 2 * pairs,
                pairs,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.n_generations, 100);
        assert!((config.percentage_to_keep - 0.1).abs() < 1e-12);
        assert_eq!(config.operator, GeneticOperator::Mutation);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(10)
            .with_n_generations(5)
            .with_percentage_to_keep(0.2)
            .with_operator(GeneticOperator::SinglePointCrossover)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 10);
        assert_eq!(config.n_generations, 5);
        assert!((config.percentage_to_keep - 0.2).abs() < 1e-12);
        assert_eq!(config.operator, GeneticOperator::SinglePointCrossover);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.elite_count(), 2);
        assert_eq!(config.pair_count(), 5);
    }

    #[test]
    fn test_validate_zero_sizes() {
        let config = EvolutionConfig::default().with_population_size(0);
        assert!(config.validate().unwrap_err().is_invalid_input());
        let config = EvolutionConfig::default().with_n_generations(0);
        assert!(config.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_validate_keep_range_is_open() {
        for ratio in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = EvolutionConfig::default().with_percentage_to_keep(ratio);
            assert!(config.validate().is_err(), "ratio {ratio} should be rejected");
        }
        let config = EvolutionConfig::default().with_percentage_to_keep(0.99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_odd_population_without_elites() {
        // 5 slots, 0 elites, 2 pairs -> at most 4 children
        let config = EvolutionConfig::default()
            .with_population_size(5)
            .with_percentage_to_keep(0.1);
        assert_eq!(
            config.validate(),
            Err(Error::ExhaustedParents {
                target: 5,
                produced: 4,
                pairs: 2
            })
        );

        // one elite closes the gap
        let config = config.with_percentage_to_keep(0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_single_candidate() {
        let config = EvolutionConfig::default()
            .with_population_size(1)
            .with_percentage_to_keep(0.5);
        assert!(matches!(
            config.validate(),
            Err(Error::ExhaustedParents { .. })
        ));
    }
}
