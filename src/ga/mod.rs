//! Genetic Algorithm for tours over 2-D cities.
//!
//! A population of candidate tours is evolved toward shorter total length
//! by tournament selection, one-point crossover with duplicate repair,
//! swap mutation, and elitist generational replacement.
//!
//! # Key Types
//!
//! - [`TspConfig`]: Algorithm parameters (rates, population, elitism, cycle)
//! - [`TspEngine`]: Executes the evolutionary loop as a state machine
//! - [`TspResult`]: Best tour found with run statistics
//! - [`Chromosome`]: A candidate tour with a lazily computed fitness
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover with repair and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::TspConfig;
pub use fitness::{evaluate_generation, tour_fitness, tour_length};
pub use runner::{solve, EngineState, TspEngine, TspResult};
pub use selection::tournament;
pub use types::{Chromosome, Generation, NoopObserver, ProgressObserver};
