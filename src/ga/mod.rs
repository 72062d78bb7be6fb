//! Genetic search for graph colorings.
//!
//! A population of candidate 3-colorings evolves over a fixed number of
//! generations. Each generation keeps its best candidates unchanged
//! (elitism), samples parent pairs in proportion to fitness, and fills the
//! rest of the next generation with children from one genetic operator.
//!
//! # Key Types
//!
//! - [`Candidate`]: a coloring with its cached fitness
//! - [`EvolutionConfig`]: population size, generations, elitism, operator, seed
//! - [`GeneticOperator`]: mutation or single-point crossover
//! - [`EvolutionRunner`]: executes the generation loop
//! - [`EvolutionHistory`]: per-generation fitness lists and fittest candidates
//!
//! # Building Blocks
//!
//! - [`random_population`], [`find_fittest`]
//! - [`selection_probabilities`], [`select_parent_pairs`]
//! - [`update_population`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;
mod update;

pub use config::EvolutionConfig;
pub use operators::GeneticOperator;
pub use population::{find_fittest, random_population, Fittest};
pub use runner::{EvolutionHistory, EvolutionResult, EvolutionRunner, GenerationStats};
pub use selection::{select_parent_pairs, selection_probabilities};
pub use types::{Candidate, Color};
pub use update::update_population;
