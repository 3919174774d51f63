//! GA evolutionary loop execution.
//!
//! [`TspEngine`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! elitist replacement → repeat, for a fixed number of generations.

use super::config::TspConfig;
use super::fitness::evaluate_generation;
use super::operators::{crossover, mutate};
use super::selection::tournament;
use super::types::{sort_descending, Chromosome, Generation, NoopObserver, ProgressObserver};
use crate::city::City;
use crate::error::{Result, TspError};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Lifecycle of a [`TspEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No generation has been built yet.
    Uninitialized,
    /// About to run the step for `generation` (0-based).
    Running { generation: usize },
    /// The generation budget is spent.
    Done,
}

/// Result of a tour optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TspResult {
    /// The best tour: the input cities, reordered.
    pub tour: Vec<City>,

    /// The best tour as indices into the input city list.
    pub order: Vec<usize>,

    /// Fitness of the best tour (`1 / distance`).
    pub best_fitness: f64,

    /// Length of the best tour, including the closing leg when cycling.
    pub distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of the current generation after the initial evaluation
    /// and after each replacement.
    pub fitness_history: Vec<f64>,
}

/// Evolves tours over a fixed city list.
///
/// The engine owns its configuration, the cities, and its random source
/// for its whole lifetime. Every random draw comes from that one source
/// in a fixed order, so a seeded engine is fully reproducible.
///
/// # Usage
///
/// ```
/// use u_tsp::{City, ga::{TspConfig, TspEngine}};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 10.0),
///     City::new(10.0, 10.0),
///     City::new(10.0, 0.0),
/// ];
/// let config = TspConfig::default()
///     .with_chromosomes(20)
///     .with_generations(10)
///     .with_elite(2)
///     .with_seed(42);
///
/// let result = TspEngine::new(cities, config)?.run()?;
/// assert_eq!(result.tour.len(), 4);
/// assert!((result.distance - 40.0).abs() < 1e-9);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
#[derive(Debug)]
pub struct TspEngine<R: Rng = StdRng> {
    cities: Vec<City>,
    config: TspConfig,
    rng: R,
    state: EngineState,
    generation: Generation,
    best_fitness: Option<f64>,
    fitness_history: Vec<f64>,
}

impl TspEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from OS entropy
    /// when no seed is set.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidConfiguration`] if the configuration is
    /// invalid or `cities` is empty.
    pub fn new(cities: Vec<City>, config: TspConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(cities, config, rng)
    }
}

impl<R: Rng> TspEngine<R> {
    /// Creates an engine that draws all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidConfiguration`] if the configuration is
    /// invalid or `cities` is empty.
    pub fn with_rng(cities: Vec<City>, config: TspConfig, rng: R) -> Result<Self> {
        config.validate()?;
        if cities.is_empty() {
            return Err(TspError::config("city list must not be empty"));
        }

        Ok(Self {
            cities,
            generation: Vec::with_capacity(config.chromosomes),
            fitness_history: Vec::with_capacity(config.generations + 1),
            config,
            rng,
            state: EngineState::Uninitialized,
            best_fitness: None,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn config(&self) -> &TspConfig {
        &self.config
    }

    /// The current generation. Empty before initialization.
    pub fn generation(&self) -> &[Chromosome] {
        &self.generation
    }

    /// Best fitness seen so far across all steps.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best_fitness
    }

    /// Best fitness of the current generation after each replacement.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Builds the first generation from random permutations.
    ///
    /// Does nothing unless the engine is [`EngineState::Uninitialized`].
    pub fn initialize(&mut self) {
        if self.state != EngineState::Uninitialized {
            return;
        }

        let n = self.cities.len();
        self.generation = (0..self.config.chromosomes)
            .map(|_| {
                let mut order: Vec<usize> = (0..n).collect();
                order.shuffle(&mut self.rng);
                Chromosome::new(order)
            })
            .collect();
        self.state = EngineState::Running { generation: 0 };

        debug!(
            "initialized {} chromosomes over {} cities",
            self.config.chromosomes, n
        );
    }

    /// Runs one generation and returns the resulting state.
    pub fn step(&mut self) -> Result<EngineState> {
        self.step_with_observer(&mut NoopObserver)
    }

    /// Runs one generation, reporting improvements to `observer`.
    ///
    /// Initializes the engine first if needed. In [`EngineState::Done`]
    /// this is a no-op.
    pub fn step_with_observer<O>(&mut self, observer: &mut O) -> Result<EngineState>
    where
        O: ProgressObserver + ?Sized,
    {
        if self.state == EngineState::Uninitialized {
            self.initialize();
        }
        let gen = match self.state {
            EngineState::Running { generation } => generation,
            _ => return Ok(self.state),
        };

        // 1. Evaluate the current generation
        self.evaluate_current()?;

        // 2. Track best so far
        let gen_best = max_fitness(&self.generation);
        if self.fitness_history.is_empty() {
            self.fitness_history.push(gen_best);
        }
        if self.best_fitness.map_or(true, |best| gen_best > best) {
            self.best_fitness = Some(gen_best);
            info!(
                "generation {}: best fitness {:.6e} (distance {:.3})",
                gen,
                gen_best,
                1.0 / gen_best
            );
            observer.on_improvement(gen, gen_best);
        }

        // 3. Breed the next generation
        let mut next = self.breed()?;

        // 4. Evaluate it
        evaluate_generation(&self.cities, &mut next, self.config.cycle, self.config.parallel)?;

        // 5. Sort both, best first
        sort_descending(&mut self.generation);
        sort_descending(&mut next);

        // 6. Elitist replacement
        self.generation.truncate(self.config.elite);
        next.truncate(self.config.chromosomes - self.config.elite);
        self.generation.append(&mut next);

        let after = max_fitness(&self.generation);
        self.fitness_history.push(after);
        debug!("generation {gen}: current best {after:.6e}");

        // 7. Advance
        self.state = if gen + 1 >= self.config.generations {
            EngineState::Done
        } else {
            EngineState::Running {
                generation: gen + 1,
            }
        };
        Ok(self.state)
    }

    /// Runs the full evolutionary loop and returns the best tour.
    pub fn run(self) -> Result<TspResult> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Runs the full loop, reporting improvements to `observer`.
    pub fn run_with_observer<O>(mut self, observer: &mut O) -> Result<TspResult>
    where
        O: ProgressObserver + ?Sized,
    {
        while self.step_with_observer(observer)? != EngineState::Done {}
        self.finish()
    }

    /// Produces `chromosomes` unevaluated children from tournament parents.
    fn breed(&mut self) -> Result<Generation> {
        let mut next = Vec::with_capacity(self.config.chromosomes);
        for _ in 0..self.config.chromosomes {
            let father = tournament(&self.generation, self.config.contestants, &mut self.rng)?;
            let mother = tournament(&self.generation, self.config.contestants, &mut self.rng)?;

            let order = crossover(&father, &mother, self.config.crossover_rate, &mut self.rng);
            let mut child = Chromosome::new(order);
            mutate(&mut child, self.config.mutation_rate, &mut self.rng);

            next.push(child);
        }
        Ok(next)
    }

    fn evaluate_current(&mut self) -> Result<()> {
        evaluate_generation(
            &self.cities,
            &mut self.generation,
            self.config.cycle,
            self.config.parallel,
        )
    }

    /// Final evaluation and sort; maps the winner back to cities.
    fn finish(mut self) -> Result<TspResult> {
        self.evaluate_current()?;
        sort_descending(&mut self.generation);

        let best = self
            .generation
            .first()
            .ok_or_else(|| TspError::config("population is empty"))?;
        let best_fitness = best.fitness().ok_or_else(|| {
            TspError::DegenerateInput("best chromosome has no fitness".into())
        })?;
        let order = best.order().to_vec();
        let tour = order.iter().map(|&i| self.cities[i]).collect();

        Ok(TspResult {
            tour,
            order,
            best_fitness,
            distance: 1.0 / best_fitness,
            generations: self.config.generations,
            fitness_history: self.fitness_history,
        })
    }
}

/// Runs a seeded or entropy-seeded engine and returns the best tour.
///
/// ```
/// use u_tsp::{solve, City, ga::TspConfig};
///
/// let cities: Vec<City> = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
///     .into_iter()
///     .map(City::from)
///     .collect();
/// let tour = solve(cities.clone(), TspConfig::default().with_seed(1))?;
/// assert_eq!(tour.len(), cities.len());
/// # Ok::<(), u_tsp::TspError>(())
/// ```
pub fn solve(cities: Vec<City>, config: TspConfig) -> Result<Vec<City>> {
    Ok(TspEngine::new(cities, config)?.run()?.tour)
}

/// Highest fitness in an evaluated generation.
fn max_fitness(generation: &[Chromosome]) -> f64 {
    generation
        .iter()
        .map(Chromosome::fitness_key)
        .fold(f64::NEG_INFINITY, f64::max)
}

// ============================================================================
// Tests
// ============================================================================
