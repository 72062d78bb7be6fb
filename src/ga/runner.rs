//! Evolution driver.
//!
//! [`EvolutionRunner`] runs the generation loop exactly
//! `n_generations` times: evaluate → record → reproduce. There is no
//! convergence-based stopping.

use super::config::EvolutionConfig;
use super::population::{find_fittest, random_population};
use super::types::Candidate;
use super::update::update_population;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::random::{create_rng, random_seed};
use rand::Rng;

/// Per-generation records of a run, indexed by generation number.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionHistory {
    /// Fitness of every candidate, one list per generation.
    pub fitness_history: Vec<Vec<usize>>,
    /// Fittest candidate of each generation.
    pub fittest_history: Vec<Candidate>,
}

impl EvolutionHistory {
    fn with_capacity(generations: usize) -> Self {
        Self {
            fitness_history: Vec::with_capacity(generations),
            fittest_history: Vec::with_capacity(generations),
        }
    }

    fn record(&mut self, fitness_values: Vec<usize>, fittest: Candidate) {
        self.fitness_history.push(fitness_values);
        self.fittest_history.push(fittest);
    }

    /// Number of recorded generations.
    pub fn generations(&self) -> usize {
        self.fittest_history.len()
    }

    /// The fittest candidate over all generations (earliest on ties).
    pub fn best_ever(&self) -> Option<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in &self.fittest_history {
            if best.map_or(true, |b| candidate.fitness() > b.fitness()) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Summary statistics for one generation.
    pub fn stats(&self, generation: usize) -> Option<GenerationStats> {
        GenerationStats::from_fitness(self.fitness_history.get(generation)?)
    }
}

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub best: usize,
    pub worst: usize,
    pub mean: f64,
}

impl GenerationStats {
    /// Computes the summary, or `None` for an empty list.
    pub fn from_fitness(values: &[usize]) -> Option<Self> {
        let best = *values.iter().max()?;
        let worst = *values.iter().min()?;
        let mean = values.iter().sum::<usize>() as f64 / values.len() as f64;
        Some(Self { best, worst, mean })
    }
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Recorded generations.
    pub history: EvolutionHistory,

    /// Population produced by the last reproduction step. It was never
    /// recorded in `history`.
    pub final_population: Vec<Candidate>,

    /// Seed the run's RNG was created from, when the driver created it.
    pub seed: Option<u64>,
}

impl EvolutionResult {
    /// The fittest candidate built during the run.
    ///
    /// Covers the recorded generations and `final_population`. On ties the
    /// earliest recorded candidate wins.
    pub fn best_ever(&self) -> Option<&Candidate> {
        let recorded = self.history.best_ever();
        let last = find_fittest(&self.final_population)
            .ok()
            .map(|fittest| fittest.candidate);
        match (recorded, last) {
            (Some(r), Some(l)) if l.fitness() > r.fitness() => Some(l),
            (Some(r), _) => Some(r),
            (None, l) => l,
        }
    }
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use chromagen::ga::{EvolutionConfig, EvolutionRunner};
/// use chromagen::graph::Graph;
///
/// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let config = EvolutionConfig::default()
///     .with_population_size(10)
///     .with_n_generations(5)
///     .with_percentage_to_keep(0.2)
///     .with_seed(42);
///
/// let result = EvolutionRunner::run(&graph, &config).unwrap();
/// assert_eq!(result.history.generations(), 5);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Validates `config`, seeds an RNG, builds a random initial
    /// population, and evolves it.
    pub fn run(graph: &Graph, config: &EvolutionConfig) -> Result<EvolutionResult> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(random_seed);
        let mut rng = create_rng(seed);

        let population = random_population(config.population_size, graph, &mut rng);
        let mut result = Self::evolve(population, graph, config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Evolves `population` for `config.n_generations` generations.
    ///
    /// Every candidate must have been built against `graph`, and the
    /// population must have `config.population_size` members.
    pub fn evolve<R: Rng>(
        population: Vec<Candidate>,
        graph: &Graph,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(Error::invalid(format!(
                "initial population has {} candidates, expected {}",
                population.len(),
                config.population_size
            )));
        }
        if let Some(c) = population.iter().find(|c| c.n_nodes() != graph.n_nodes()) {
            return Err(Error::ColorCountMismatch {
                expected: graph.n_nodes(),
                actual: c.n_nodes(),
            });
        }

        tracing::info!(
            n_nodes = graph.n_nodes(),
            edges = graph.edge_count(),
            population = config.population_size,
            generations = config.n_generations,
            operator = %config.operator,
            "starting evolution"
        );

        let mut history = EvolutionHistory::with_capacity(config.n_generations);
        let mut population = population;

        for gen in 0..config.n_generations {
            let fittest = find_fittest(&population)?;
            let best = fittest.candidate.fitness();
            history.record(fittest.fitness_values, fittest.candidate.clone());
            tracing::debug!(generation = gen + 1, best_fitness = best, "generation evaluated");

            population = update_population(&population, graph, config, rng)?;
        }

        let result = EvolutionResult {
            history,
            final_population: population,
            seed: None,
        };
        if let Some(best) = result.best_ever() {
            tracing::info!(
                best_fitness = best.fitness(),
                max_fitness = graph.edge_count(),
                proper = best.is_proper(graph),
                "evolution finished"
            );
        }
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GeneticOperator;

    fn path4() -> Graph {
        Graph::from_adjacency(vec![vec![1], vec![0, 2], vec![1, 3], vec![2]]).unwrap()
    }

    fn small_config() -> EvolutionConfig {
        EvolutionConfig::default()
            .with_population_size(10)
            .with_n_generations(5)
            .with_percentage_to_keep(0.2)
            .with_parallel(false)
            .with_seed(42)
    }

    #[test]
    fn test_history_shape() {
        let g = path4();
        let result = EvolutionRunner::run(&g, &small_config()).unwrap();
        assert_eq!(result.history.fitness_history.len(), 5);
        assert_eq!(result.history.fittest_history.len(), 5);
        assert!(result.history.fitness_history.iter().all(|f| f.len() == 10));
        assert_eq!(result.final_population.len(), 10);
        assert_eq!(result.seed, Some(42));
    }

    #[test]
    fn test_fittest_matches_fitness_list() {
        let g = path4();
        let result = EvolutionRunner::run(&g, &small_config()).unwrap();
        let h = &result.history;
        for (values, fittest) in h.fitness_history.iter().zip(&h.fittest_history) {
            assert_eq!(fittest.fitness(), *values.iter().max().unwrap());
        }
    }

    #[test]
    fn test_elitism_keeps_best_non_decreasing() {
        let mut rng = create_rng(5);
        let g = Graph::random(18, 0.35, &mut rng).unwrap();
        let config = EvolutionConfig::default()
            .with_population_size(40)
            .with_n_generations(30)
            .with_percentage_to_keep(0.1)
            .with_parallel(false)
            .with_seed(5);
        let result = EvolutionRunner::run(&g, &config).unwrap();
        for w in result.history.fittest_history.windows(2) {
            assert!(w[1].fitness() >= w[0].fitness());
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let g = path4();
        for op in [GeneticOperator::Mutation, GeneticOperator::SinglePointCrossover] {
            let config = small_config().with_operator(op);
            let a = EvolutionRunner::run(&g, &config).unwrap();
            let b = EvolutionRunner::run(&g, &config).unwrap();
            assert_eq!(a.history, b.history);
            assert_eq!(a.final_population, b.final_population);
        }
    }

    #[test]
    fn test_improves_on_random_graph() {
        let mut rng = create_rng(42);
        let g = Graph::random(18, 0.35, &mut rng).unwrap();
        let config = EvolutionConfig::default()
            .with_population_size(100)
            .with_n_generations(60)
            .with_parallel(false)
            .with_seed(42);
        let result = EvolutionRunner::run(&g, &config).unwrap();
        let first = result.history.fittest_history[0].fitness();
        let best = result.history.best_ever().unwrap().fitness();
        assert!(best >= first);
        assert!(best <= g.edge_count());
    }

    #[test]
    fn test_evolve_rejects_wrong_population_size() {
        let g = path4();
        let mut rng = create_rng(1);
        let pop = random_population(3, &g, &mut rng);
        let err = EvolutionRunner::evolve(pop, &g, &small_config(), &mut rng).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_evolve_rejects_foreign_candidates() {
        let g = path4();
        let other = Graph::empty(3).unwrap();
        let mut rng = create_rng(1);
        let pop = random_population(10, &other, &mut rng);
        let err = EvolutionRunner::evolve(pop, &g, &small_config(), &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::ColorCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_invalid_config_surfaces() {
        let g = path4();
        let config = small_config().with_percentage_to_keep(1.0);
        assert!(EvolutionRunner::run(&g, &config).is_err());

        let config = small_config()
            .with_population_size(5)
            .with_percentage_to_keep(0.1);
        assert!(matches!(
            EvolutionRunner::run(&g, &config),
            Err(Error::ExhaustedParents { .. })
        ));
    }

    #[test]
    fn test_result_best_ever_covers_final_population() {
        let g = path4();
        let history = EvolutionHistory {
            fitness_history: vec![vec![1, 2]],
            fittest_history: vec![Candidate::parse("rrgb", &g).unwrap()],
        };
        let final_population = vec![
            Candidate::parse("rrrr", &g).unwrap(),
            Candidate::parse("rgrg", &g).unwrap(),
        ];
        let result = EvolutionResult {
            history: history.clone(),
            final_population,
            seed: None,
        };
        assert_eq!(result.history.best_ever().unwrap().fitness(), 2);
        assert_eq!(result.best_ever().unwrap().to_string(), "rgrg");

        // ties keep the recorded candidate
        let result = EvolutionResult {
            history,
            final_population: vec![Candidate::parse("rgbb", &g).unwrap()],
            seed: None,
        };
        assert_eq!(result.best_ever().unwrap().to_string(), "rrgb");
    }

    #[test]
    fn test_best_ever_and_stats() {
        let g = path4();
        let history = EvolutionHistory {
            fitness_history: vec![vec![1, 2, 0], vec![3, 3, 1], vec![2, 2, 2]],
            fittest_history: vec![
                Candidate::parse("rrgb", &g).unwrap(),
                Candidate::parse("rgrg", &g).unwrap(),
                Candidate::parse("grgr", &g).unwrap(),
            ],
        };
        assert_eq!(history.generations(), 3);
        assert_eq!(history.best_ever().unwrap().to_string(), "rgrg");

        let stats = history.stats(1).unwrap();
        assert_eq!(stats.best, 3);
        assert_eq!(stats.worst, 1);
        assert!((stats.mean - 7.0 / 3.0).abs() < 1e-12);
        assert!(history.stats(3).is_none());
        assert!(EvolutionHistory::default().best_ever().is_none());
    }
}
