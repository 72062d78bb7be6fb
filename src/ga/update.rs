//! Generation transition: elitism followed by reproduction.

use super::config::EvolutionConfig;
use super::operators::GeneticOperator;
use super::selection::select_parent_pairs;
use super::types::{Candidate, Color};
use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::Rng;

/// Builds the next generation from `population`.
///
/// 1. Ranks a copy of the candidate indices by fitness, descending. The
///    sort is stable, so equal fitness keeps population order.
/// 2. Copies the top `elite_count()` candidates unchanged.
/// 3. Samples `population_size / 2` parent pairs from the full population.
/// 4. Applies the operator to successive pairs until the generation is
///    full. When one slot remains, the second child of the last pair is
///    dropped; it is still drawn, so the random stream does not depend on
///    the remainder.
///
/// The input population is never reordered or modified.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `config` is invalid or the population
///   size differs from `config.population_size`.
/// - [`Error::ExhaustedParents`] if the pairs cannot fill the generation.
///   `validate` catches this up front; the reproduction loop reports it
///   again if the pairs ever run out.
pub fn update_population<R: Rng>(
    population: &[Candidate],
    graph: &Graph,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Result<Vec<Candidate>> {
    config.validate()?;
    let target = config.population_size;
    if population.len() != target {
        return Err(Error::invalid(format!(
            "population has {} candidates, expected {target}",
            population.len()
        )));
    }

    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| population[b].fitness().cmp(&population[a].fitness()));

    let elite_count = config.elite_count();
    let mut next_gen: Vec<Candidate> = ranked[..elite_count]
        .iter()
        .map(|&i| population[i].clone())
        .collect();

    let pairs = select_parent_pairs(population, config.pair_count(), rng)?;
    let offspring = breed(population, &pairs, config.operator, target - elite_count, rng)
        .map_err(|produced| Error::ExhaustedParents {
            target,
            produced: elite_count + produced,
            pairs: pairs.len(),
        })?;

    next_gen.extend(evaluate_offspring(offspring, graph, config.parallel));
    debug_assert_eq!(next_gen.len(), target);
    Ok(next_gen)
}

/// Applies `operator` to successive pairs until `needed` children exist.
///
/// The second child of the last pair is dropped when `needed` is odd. On
/// running out of pairs, returns the number of children produced so far.
/// [`EvolutionConfig::validate`] rules that out for valid configurations.
fn breed<R: Rng>(
    population: &[Candidate],
    pairs: &[(usize, usize)],
    operator: GeneticOperator,
    needed: usize,
    rng: &mut R,
) -> std::result::Result<Vec<Vec<Color>>, usize> {
    let mut offspring: Vec<Vec<Color>> = Vec::with_capacity(needed);
    let mut remaining = pairs.iter();
    while offspring.len() < needed {
        let &(x, y) = remaining.next().ok_or(offspring.len())?;
        let (a, b) = operator.recombine(population[x].colors(), population[y].colors(), rng);
        offspring.push(a);
        if offspring.len() < needed {
            offspring.push(b);
        }
    }
    Ok(offspring)
}

/// Builds candidates from child color sequences, in order.
fn evaluate_offspring(offspring: Vec<Vec<Color>>, graph: &Graph, parallel: bool) -> Vec<Candidate> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return offspring
                .into_par_iter()
                .map(|colors| Candidate::evaluated(colors, graph))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    offspring
        .into_iter()
        .map(|colors| Candidate::evaluated(colors, graph))
        .collect()
}
