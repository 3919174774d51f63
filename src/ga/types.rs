//! Core types for the tour GA.
//!
//! A [`Chromosome`] is a candidate tour over the engine's city list, and a
//! [`Generation`] is the population the engine evolves. Progress is
//! reported through [`ProgressObserver`].

/// A candidate tour with a lazily computed fitness.
///
/// `order` is a permutation of `0..n`, where `n` is the number of cities
/// and each value indexes the engine's city list. The fitness is `None`
/// until the tour is scored; it is `Some(1 / length)` afterwards.
///
/// Any operation that produces or rearranges an order leaves the fitness
/// unevaluated. Only fitness evaluation may set it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    order: Vec<usize>,
    fitness: Option<f64>,
}

impl Chromosome {
    /// Creates an unevaluated chromosome from a city order.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: None,
        }
    }

    /// The city order (indices into the city list).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the order.
    ///
    /// Invalidates the cached fitness, since the caller may rearrange it.
    pub fn order_mut(&mut self) -> &mut [usize] {
        self.fitness = None;
        &mut self.order
    }

    /// The fitness, or `None` if not evaluated since the last change.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Fitness as a sort key; unevaluated chromosomes rank last.
    pub(crate) fn fitness_key(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A population of chromosomes.
pub type Generation = Vec<Chromosome>;

/// Receives progress events while the engine runs.
///
/// Purely informational: the engine never reads anything back from the
/// observer.
///
/// Any `FnMut(usize, f64)` closure is an observer:
///
/// ```
/// use u_tsp::ga::ProgressObserver;
///
/// let mut seen = Vec::new();
/// let mut observer = |generation: usize, fitness: f64| seen.push((generation, fitness));
/// observer.on_improvement(0, 0.025);
/// assert_eq!(seen, vec![(0, 0.025)]);
/// ```
pub trait ProgressObserver {
    /// Called when the best fitness seen so far improves at `generation`.
    fn on_improvement(&mut self, generation: usize, best_fitness: f64);
}

impl<F: FnMut(usize, f64)> ProgressObserver for F {
    fn on_improvement(&mut self, generation: usize, best_fitness: f64) {
        self(generation, best_fitness)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_improvement(&mut self, _generation: usize, _best_fitness: f64) {}
}

/// Sorts a generation by fitness, best first.
///
/// The sort is stable; ties keep their relative order.
pub(crate) fn sort_descending(generation: &mut [Chromosome]) {
    generation.sort_by(|a, b| {
        b.fitness_key()
            .partial_cmp(&a.fitness_key())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
