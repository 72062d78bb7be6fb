//! Genetic operators for candidate colorings.
//!
//! Exactly one operator is active per run. Both take a parent pair and
//! return two children; neither modifies its inputs.
//!
//! # Operators
//!
//! - [`GeneticOperator::Mutation`]: each parent independently gets one
//!   random node recolored to a different palette color. The parents are
//!   not recombined.
//! - [`GeneticOperator::SinglePointCrossover`]: one cut point `k`; child A
//!   takes `p1[..k] ++ p2[k..]`, child B takes `p2[..k] ++ p1[k..]`.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{Candidate, Color};
use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Reproduction strategy.
///
/// ```
/// use chromagen::ga::GeneticOperator;
///
/// let op: GeneticOperator = "spc".parse().unwrap();
/// assert_eq!(op, GeneticOperator::SinglePointCrossover);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GeneticOperator {
    /// Single-node recoloring of each parent.
    #[default]
    Mutation,
    /// One-cut-point crossover of the two parents.
    SinglePointCrossover,
}

impl GeneticOperator {
    /// Produces two child color sequences from two parent sequences.
    ///
    /// # Panics
    /// Panics if the parents are empty or differ in length.
    pub fn recombine<R: Rng>(
        &self,
        parent1: &[Color],
        parent2: &[Color],
        rng: &mut R,
    ) -> (Vec<Color>, Vec<Color>) {
        match self {
            GeneticOperator::Mutation => (
                point_mutation(parent1, rng),
                point_mutation(parent2, rng),
            ),
            GeneticOperator::SinglePointCrossover => {
                let point = rng.random_range(0..parent1.len());
                single_point_crossover(parent1, parent2, point)
            }
        }
    }

    /// Produces two freshly evaluated children from a parent pair.
    pub fn reproduce<R: Rng>(
        &self,
        parents: (&Candidate, &Candidate),
        graph: &Graph,
        rng: &mut R,
    ) -> Result<(Candidate, Candidate)> {
        let (p1, p2) = parents;
        for parent in [p1, p2] {
            if parent.n_nodes() != graph.n_nodes() {
                return Err(Error::ColorCountMismatch {
                    expected: graph.n_nodes(),
                    actual: parent.n_nodes(),
                });
            }
        }
        let (a, b) = self.recombine(p1.colors(), p2.colors(), rng);
        Ok((Candidate::evaluated(a, graph), Candidate::evaluated(b, graph)))
    }
}

impl FromStr for GeneticOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mutation" => Ok(GeneticOperator::Mutation),
            "crossover" | "spc" | "single-point-crossover" => {
                Ok(GeneticOperator::SinglePointCrossover)
            }
            other => Err(Error::invalid(format!(
                "unknown genetic operator '{other}', expected 'mutation' or 'crossover'"
            ))),
        }
    }
}

impl fmt::Display for GeneticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneticOperator::Mutation => write!(f, "mutation"),
            GeneticOperator::SinglePointCrossover => write!(f, "crossover"),
        }
    }
}

/// Copies `parent` and recolors one uniformly chosen node to one of the
/// two other palette colors.
///
/// # Panics
/// Panics if `parent` is empty.
pub fn point_mutation<R: Rng>(parent: &[Color], rng: &mut R) -> Vec<Color> {
    let mut child = parent.to_vec();
    let node = rng.random_range(0..child.len());
    let others = child[node].others();
    child[node] = others[rng.random_range(0..others.len())];
    child
}

/// Single-point crossover at a fixed cut `point`.
///
/// Returns `(p1[..point] ++ p2[point..], p2[..point] ++ p1[point..])`.
///
/// # Panics
/// Panics if the parents differ in length or `point > len`.
pub fn single_point_crossover(
    parent1: &[Color],
    parent2: &[Color],
    point: usize,
) -> (Vec<Color>, Vec<Color>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}
