//! Permutation crossover and mutation for tours.
//!
//! Both operators work on `&[usize]` orders, i.e. permutations of `0..n`
//! indexing the engine's city list.
//!
//! # Crossover
//!
//! - [`crossover`]: one-point splice of the father's prefix and the
//!   mother's suffix, followed by a duplicate repair pass
//!   ([`splice_and_repair`]).
//!
//! # Mutation
//!
//! - [`swap_mutation`] / [`mutate`]: per-position swap with a random partner.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Combines two parent orders into one child order.
///
/// With probability `1 - crossover_rate` the child is a copy of `father`.
/// Otherwise a cut index is drawn uniformly from `0..n` and the child is
/// built by [`splice_and_repair`].
///
/// The result is always a permutation of the parents' elements.
///
/// # Panics
/// Panics if the parents differ in length, or if `crossover_rate` is
/// outside `[0, 1]`.
pub fn crossover<R: Rng>(
    father: &[usize],
    mother: &[usize],
    crossover_rate: f64,
    rng: &mut R,
) -> Vec<usize> {
    assert_eq!(father.len(), mother.len(), "parents must have equal length");

    if father.is_empty() || !rng.random_bool(crossover_rate) {
        return father.to_vec();
    }

    let cut = rng.random_range(0..father.len());
    splice_and_repair(father, mother, cut)
}

/// Splices `father[..cut]` with `mother[cut..]` and repairs duplicates.
///
/// The splice may repeat cities that sit in both the father's prefix and
/// the mother's suffix, and it drops the *orphans*: cities in the father's
/// suffix that the mother placed in her prefix. The repair pass walks the
/// child left to right and replaces every repeated city with the next
/// orphan. Orphans are consumed in the order they appear in the father's
/// suffix.
///
/// `cut == 0` yields the mother and `cut == n` yields the father.
///
/// # Example
///
/// ```
/// use u_tsp::ga::operators::splice_and_repair;
///
/// let father = [0, 1, 2, 3, 4, 5];
/// let mother = [5, 2, 4, 0, 1, 3];
/// // splice: [0, 1, 2] + [0, 1, 3], orphans in father order: [4, 5]
/// assert_eq!(splice_and_repair(&father, &mother, 3), vec![0, 1, 2, 4, 5, 3]);
/// ```
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents are not permutations of `0..n` of equal length,
/// or if `cut > n`.
pub fn splice_and_repair(father: &[usize], mother: &[usize], cut: usize) -> Vec<usize> {
    let n = father.len();
    assert_eq!(n, mother.len(), "parents must have equal length");
    assert!(cut <= n, "cut index {cut} out of range for length {n}");

    let mut in_mother_prefix = vec![false; n];
    for &city in &mother[..cut] {
        in_mother_prefix[city] = true;
    }
    let mut orphans = father[cut..]
        .iter()
        .copied()
        .filter(|&city| in_mother_prefix[city]);

    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&father[..cut]);
    child.extend_from_slice(&mother[cut..]);

    let mut seen = vec![false; n];
    for slot in child.iter_mut() {
        if seen[*slot] {
            *slot = orphans
                .next()
                .expect("valid permutations: one orphan per duplicate");
        }
        seen[*slot] = true;
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation over every position.
///
/// Each position is, with probability `mutation_rate`, swapped with a
/// uniformly random position (possibly itself).
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `mutation_rate` is outside `[0, 1]`.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], mutation_rate: f64, rng: &mut R) {
    let n = perm.len();
    for i in 0..n {
        if rng.random_bool(mutation_rate) {
            let j = rng.random_range(0..n);
            perm.swap(i, j);
        }
    }
}

/// Applies [`swap_mutation`] to a chromosome and clears its fitness.
pub fn mutate<R: Rng>(chromosome: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
    swap_mutation(chromosome.order_mut(), mutation_rate, rng);
}

// ============================================================================
// Tests
// ============================================================================
