//! Population construction and fittest lookup.

use super::types::Candidate;
use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::Rng;

/// Builds `size` candidates, each node colored independently and
/// uniformly at random.
pub fn random_population<R: Rng>(size: usize, graph: &Graph, rng: &mut R) -> Vec<Candidate> {
    let population: Vec<Candidate> = (0..size).map(|_| Candidate::random(graph, rng)).collect();
    tracing::debug!(size, n_nodes = graph.n_nodes(), "created random population");
    population
}

/// Fitness snapshot of one population.
#[derive(Debug, Clone)]
pub struct Fittest<'a> {
    /// Fitness of every candidate, in population order.
    pub fitness_values: Vec<usize>,
    /// Index of the first candidate with maximum fitness.
    pub index: usize,
    /// The candidate at `index`.
    pub candidate: &'a Candidate,
}

/// Collects all fitness values and locates the fittest candidate.
///
/// Ties resolve to the lowest index.
pub fn find_fittest(population: &[Candidate]) -> Result<Fittest<'_>> {
    let fitness_values: Vec<usize> = population.iter().map(Candidate::fitness).collect();
    let mut index = 0;
    for (i, &f) in fitness_values.iter().enumerate().skip(1) {
        if f > fitness_values[index] {
            index = i;
        }
    }
    let candidate = population.get(index).ok_or(Error::EmptyPopulation)?;
    Ok(Fittest {
        fitness_values,
        index,
        candidate,
    })
}
