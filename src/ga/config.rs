//! GA configuration.
//!
//! [`TspConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, TspError};

/// Configuration for the tour GA.
///
/// Controls population size, operator rates, tournament size, elitism,
/// the generation budget, and whether tours close back to their start.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::TspConfig;
///
/// let config = TspConfig::default();
/// assert_eq!(config.chromosomes, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.elite, 10);
/// assert!(config.cycle);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::TspConfig;
///
/// let config = TspConfig::default()
///     .with_chromosomes(250)
///     .with_elite(25)
///     .with_contestants(5)
///     .with_mutation_rate(0.15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TspConfig {
    /// Probability of combining two parents (0.0–1.0).
    ///
    /// When crossover is not applied, the child is a copy of the father.
    pub crossover_rate: f64,

    /// Per-position probability of a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of chromosomes in every generation.
    pub chromosomes: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Tournament size used to pick each parent.
    ///
    /// Must lie in `1..=chromosomes`.
    pub contestants: usize,

    /// Whether the tour returns from the last city to the first.
    pub cycle: bool,

    /// Number of top chromosomes carried unchanged into the next generation.
    pub elite: usize,

    /// Whether to score chromosomes in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy. Ignored when the engine is given
    /// its own random source.
    pub seed: Option<u64>,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            chromosomes: 100,
            generations: 100,
            contestants: 5,
            cycle: true,
            elite: 10,
            parallel: false,
            seed: None,
        }
    }
}

impl TspConfig {
    /// Sets the crossover rate.
    ///
    /// The value is stored as given; [`validate`](Self::validate) rejects
    /// rates outside `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the population size.
    pub fn with_chromosomes(mut self, n: usize) -> Self {
        self.chromosomes = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_contestants(mut self, k: usize) -> Self {
        self.contestants = k;
        self
    }

    /// Sets whether tours are closed cycles.
    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    /// Sets the elite count.
    pub fn with_elite(mut self, n: usize) -> Self {
        self.elite = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::InvalidConfiguration`] naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<()> {
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.chromosomes == 0 {
            return Err(TspError::config("chromosomes must be at least 1"));
        }
        if self.generations == 0 {
            return Err(TspError::config("generations must be at least 1"));
        }
        if self.contestants == 0 {
            return Err(TspError::config("contestants must be at least 1"));
        }
        if self.contestants > self.chromosomes {
            return Err(TspError::config(format!(
                "contestants ({}) exceeds chromosomes ({})",
                self.contestants, self.chromosomes
            )));
        }
        if self.elite > self.chromosomes {
            return Err(TspError::config(format!(
                "elite ({}) exceeds chromosomes ({})",
                self.elite, self.chromosomes
            )));
        }
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(TspError::config(format!(
            "{name} must be within [0, 1], got {rate}"
        )));
    }
    Ok(())
}
