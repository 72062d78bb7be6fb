//! Genetic search for low-conflict graph colorings.
//!
//! Given an undirected graph, chromagen evolves a population of 3-color
//! assignments toward colorings with as few same-colored adjacent nodes as
//! possible. It is a heuristic: a proper coloring is not guaranteed.
//!
//! - [`graph`]: immutable graphs and the random G(n, p) provider
//! - [`ga`]: candidates, selection, operators, and the evolution driver
//! - [`report`]: text and Graphviz rendering of a run's history
//! - [`random`]: seeded RNG construction
//! - [`error`]: the crate-wide error type
//!
//! # Example
//!
//! ```
//! use chromagen::ga::{EvolutionConfig, EvolutionRunner, GeneticOperator};
//! use chromagen::graph::{GraphProvider, RandomGraph};
//! use chromagen::random::create_rng;
//!
//! let graph = RandomGraph::new(18, 0.35)
//!     .unwrap()
//!     .generate(&mut create_rng(7))
//!     .unwrap();
//! let config = EvolutionConfig::default()
//!     .with_n_generations(20)
//!     .with_operator(GeneticOperator::Mutation)
//!     .with_seed(7);
//!
//! let result = EvolutionRunner::run(&graph, &config).unwrap();
//! let best = result.best_ever().unwrap();
//! assert!(best.fitness() <= graph.edge_count());
//! ```

pub mod error;
pub mod ga;
pub mod graph;
pub mod random;
pub mod report;

pub use error::{Error, Result};
