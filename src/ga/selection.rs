//! Fitness-proportional parent selection.
//!
//! Each candidate is drawn with probability `fitness / sum(fitness)`.
//! Sampling works on integer cumulative fitness, so the probabilities are
//! exact and a zero-fitness candidate is never drawn while the total is
//! positive.
//!
//! When every candidate has zero fitness (for example on a graph without
//! edges) the proportional rule is undefined; selection then falls back to
//! uniform sampling over the population.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Candidate;
use crate::error::{Error, Result};
use rand::Rng;

/// Selection probability of each candidate, in population order.
///
/// Falls back to `1 / n` for every candidate when the fitness total is zero.
pub fn selection_probabilities(population: &[Candidate]) -> Result<Vec<f64>> {
    if population.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let total: usize = population.iter().map(Candidate::fitness).sum();
    if total == 0 {
        let uniform = 1.0 / population.len() as f64;
        return Ok(vec![uniform; population.len()]);
    }
    Ok(population
        .iter()
        .map(|c| c.fitness() as f64 / total as f64)
        .collect())
}

/// Samples `number_of_pairs` ordered parent pairs, with replacement.
///
/// Returns index pairs into `population`. All first-slot parents are drawn
/// before all second-slot parents. A candidate may be paired with itself.
pub fn select_parent_pairs<R: Rng>(
    population: &[Candidate],
    number_of_pairs: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>> {
    if population.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let wheel = RouletteWheel::new(population);
    let xs: Vec<usize> = (0..number_of_pairs).map(|_| wheel.spin(rng)).collect();
    let ys: Vec<usize> = (0..number_of_pairs).map(|_| wheel.spin(rng)).collect();
    Ok(xs.into_iter().zip(ys).collect())
}

/// Cumulative fitness table over a non-empty population.
struct RouletteWheel {
    cumulative: Vec<usize>,
}

impl RouletteWheel {
    fn new(population: &[Candidate]) -> Self {
        let cumulative: Vec<usize> = population
            .iter()
            .scan(0usize, |acc, c| {
                *acc += c.fitness();
                Some(*acc)
            })
            .collect();
        if cumulative.last() == Some(&0) {
            tracing::debug!(
                size = population.len(),
                "fitness sum is zero, selecting parents uniformly"
            );
        }
        Self { cumulative }
    }

    fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let n = self.cumulative.len();
        let total = self.cumulative[n - 1];
        if total == 0 {
            return rng.random_range(0..n);
        }
        let ticket = rng.random_range(0..total);
        // first slot whose cumulative weight exceeds the ticket
        self.cumulative.partition_point(|&c| c <= ticket)
    }
}
