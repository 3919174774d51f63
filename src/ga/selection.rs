//! Tournament selection.
//!
//! A parent is chosen by sampling a few chromosomes at random and keeping
//! the fittest. Larger tournaments mean stronger selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use crate::error::{Result, TspError};
use rand::seq::index;
use rand::Rng;

/// Picks a parent by tournament and returns a copy of its order.
///
/// Samples `contestants` distinct chromosomes uniformly at random and
/// returns the order of the one with the highest fitness. Ties go to the
/// first maximum in sampled order. Unevaluated chromosomes rank below
/// every evaluated one.
///
/// # Errors
///
/// Returns [`TspError::InvalidConfiguration`] if `contestants` is zero or
/// exceeds the generation size.
///
/// # Complexity
/// O(k + n) per selection for k contestants over n chromosomes
pub fn tournament<R: Rng>(
    generation: &[Chromosome],
    contestants: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = generation.len();
    if contestants == 0 || contestants > n {
        return Err(TspError::config(format!(
            "tournament of {contestants} contestants over a generation of {n}"
        )));
    }

    let mut best: Option<&Chromosome> = None;
    for idx in index::sample(rng, n, contestants) {
        let candidate = &generation[idx];
        match best {
            Some(b) if candidate.fitness_key() <= b.fitness_key() => {}
            _ => best = Some(candidate),
        }
    }

    best.map(|c| c.order().to_vec())
        .ok_or_else(|| TspError::config("tournament sampled no contestants"))
}
