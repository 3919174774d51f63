//! Travelling-salesman tour approximation by genetic algorithm.
//!
//! Given a list of 2-D [`City`] coordinates and a [`TspConfig`], the
//! [`TspEngine`] evolves a population of candidate tours toward lower
//! total travel distance and returns the best tour it found, as the input
//! cities reordered.
//!
//! ```
//! use u_tsp::{solve, City, TspConfig};
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(10.0, 0.0),
//!     City::new(10.0, 10.0),
//!     City::new(0.0, 10.0),
//! ];
//! let tour = solve(cities, TspConfig::default().with_seed(42))?;
//! assert_eq!(tour.len(), 4);
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! The algorithm is a heuristic: it gives no optimality guarantee.
//! Random city generation and rendering of the result are left to callers.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`City`] and [`TspConfig`]
//! - `parallel`: rayon-backed fitness evaluation when
//!   [`TspConfig::parallel`] is set

pub mod city;
pub mod error;
pub mod ga;

pub use city::City;
pub use error::{Result, TspError};
pub use ga::{solve, TspConfig, TspEngine, TspResult};
