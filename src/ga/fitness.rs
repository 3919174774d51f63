//! Tour length and fitness evaluation.
//!
//! Fitness is the reciprocal of total tour length, so higher is better.
//! A tour of zero length has no defined fitness and is reported as
//! [`TspError::DegenerateInput`].

use super::types::Chromosome;
use crate::city::City;
use crate::error::{Result, TspError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Total Euclidean length of visiting `cities` in `order`.
///
/// Sums every consecutive leg; when `cycle` is true, also adds the leg from
/// the last city back to the first.
///
/// # Examples
///
/// ```
/// use u_tsp::{ga::tour_length, City};
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 10.0),
///     City::new(10.0, 10.0),
///     City::new(10.0, 0.0),
/// ];
/// assert_eq!(tour_length(&square, &[0, 1, 2, 3], true), 40.0);
/// assert_eq!(tour_length(&square, &[0, 1, 2, 3], false), 30.0);
/// ```
///
/// # Panics
/// Panics if any index in `order` is out of range for `cities`.
pub fn tour_length(cities: &[City], order: &[usize], cycle: bool) -> f64 {
    let open: f64 = order
        .windows(2)
        .map(|w| cities[w[0]].distance(&cities[w[1]]))
        .sum();

    match (cycle, order.first(), order.last()) {
        (true, Some(&first), Some(&last)) => open + cities[last].distance(&cities[first]),
        _ => open,
    }
}

/// Fitness of a tour: `1 / length`.
///
/// # Errors
///
/// Returns [`TspError::DegenerateInput`] if the length is zero or not
/// finite, or if its reciprocal overflows (subnormal lengths).
///
/// # Panics
/// Panics if any index in `order` is out of range for `cities`.
pub fn tour_fitness(cities: &[City], order: &[usize], cycle: bool) -> Result<f64> {
    let length = tour_length(cities, order, cycle);
    let fitness = 1.0 / length;
    if length > 0.0 && fitness.is_finite() {
        Ok(fitness)
    } else {
        Err(TspError::DegenerateInput(format!(
            "tour over {} cities has total distance {length}",
            order.len()
        )))
    }
}

/// Scores every unevaluated chromosome in `generation`.
///
/// Chromosomes that already carry a fitness are skipped, so calling this
/// twice does no extra work.
pub fn evaluate_generation(
    cities: &[City],
    generation: &mut [Chromosome],
    cycle: bool,
    parallel: bool,
) -> Result<()> {
    #[cfg(feature = "parallel")]
    if parallel {
        return generation
            .par_iter_mut()
            .filter(|c| !c.is_evaluated())
            .try_for_each(|c| evaluate_one(cities, c, cycle));
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    generation
        .iter_mut()
        .filter(|c| !c.is_evaluated())
        .try_for_each(|c| evaluate_one(cities, c, cycle))
}

fn evaluate_one(cities: &[City], chromosome: &mut Chromosome, cycle: bool) -> Result<()> {
    let fitness = tour_fitness(cities, chromosome.order(), cycle)?;
    chromosome.set_fitness(fitness);
    Ok(())
}
