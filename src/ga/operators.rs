//! Generic genetic operators.
//!
//! Domain-agnostic building blocks the problem modules compose into their
//! [`GaProblem`](super::GaProblem) implementations. The crossover functions
//! take the cut point explicitly so every problem can state its own cut
//! contract; random draws live with the caller.
//!
//! # Crossover Operators
//!
//! - [`splice`]: one-point crossover over any sequence
//! - [`mask_crossover`]: one-point crossover over a `u64` bitmask
//! - [`prefix_order_crossover`]: order-preserving crossover for
//!   permutations with a fixed prefix (Davis, 1985 variant)
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two distinct positions past a fixed prefix
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover: the first `point` genes of `head` followed by the
/// genes of `tail` from `point` on.
///
/// `point` is clamped to the length of `head`; a `tail` shorter than
/// `point` contributes nothing, so sequences of different lengths are fine.
pub fn splice<T: Clone>(head: &[T], tail: &[T], point: usize) -> Vec<T> {
    let point = point.min(head.len());
    let mut child = Vec::with_capacity(point + tail.len().saturating_sub(point));
    child.extend_from_slice(&head[..point]);
    if point < tail.len() {
        child.extend_from_slice(&tail[point..]);
    }
    child
}

/// Mask of the low `width` bits.
pub fn width_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// One-point crossover over bitmasks of `width` bits.
///
/// With `mask = (1 << point) - 1`, the first child takes the low bits of
/// `parent1` and the high bits of `parent2`; the second child is the
/// complementary combination. Bits at or above `width` are cleared.
pub fn mask_crossover(parent1: u64, parent2: u64, point: u32, width: u32) -> (u64, u64) {
    let full = width_mask(width);
    let low = width_mask(point.min(width));
    let high = full & !low;
    let child1 = (parent1 & low) | (parent2 & high);
    let child2 = (parent2 & low) | (parent1 & high);
    (child1, child2)
}

/// Order-preserving crossover with a copied prefix.
///
/// # Algorithm
///
/// 1. Copy `template[..point]` verbatim
/// 2. Append every element of `donor`, in donor order, that is not yet in
///    the child
///
/// For two permutations of `0..n` the child is again a permutation of
/// `0..n`, and it starts with `template[0]` whenever `point >= 1`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn prefix_order_crossover(template: &[usize], donor: &[usize], point: usize) -> Vec<usize> {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");

    let point = point.min(n);
    let mut child = Vec::with_capacity(n);
    let mut present = vec![false; n];

    for &city in &template[..point] {
        child.push(city);
        present[city] = true;
    }
    for &city in donor {
        if !present[city] {
            child.push(city);
            present[city] = true;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions in `fixed..len`.
///
/// Positions before `fixed` are never touched. Does nothing if fewer than
/// two positions are movable.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], fixed: usize, rng: &mut R) {
    let n = genes.len();
    if n < fixed + 2 {
        return;
    }
    let i = rng.random_range(fixed..n);
    let mut j = rng.random_range(fixed..n - 1);
    if j >= i {
        j += 1;
    }
    genes.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- splice ----

    #[test]
    fn test_splice_takes_head_then_tail() {
        let x = [1, 2, 3, 4];
        let y = [5, 6, 7, 8];
        assert_eq!(splice(&x, &y, 1), vec![1, 6, 7, 8]);
        assert_eq!(splice(&x, &y, 3), vec![1, 2, 3, 8]);
    }

    #[test]
    fn test_splice_uneven_lengths() {
        let x = ['a', 'b', 'c'];
        let y = ['x'];
        assert_eq!(splice(&x, &y, 2), vec!['a', 'b']);
        assert_eq!(splice(&y, &x, 1), vec!['x', 'b', 'c']);
        assert_eq!(splice(&y, &x, 5), vec!['x', 'b', 'c']);
    }

    // ---- mask crossover ----

    #[test]
    fn test_mask_crossover_example() {
        let (c1, c2) = mask_crossover(0b1010, 0b0101, 2, 4);
        assert_eq!(c1, 0b0110);
        assert_eq!(c2, 0b1001);
    }

    #[test]
    fn test_width_mask() {
        assert_eq!(width_mask(0), 0);
        assert_eq!(width_mask(3), 0b111);
        assert_eq!(width_mask(64), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_mask_crossover_children_follow_mask(
            width in 2u32..=64,
            a in any::<u64>(),
            b in any::<u64>(),
            point_seed in any::<u32>(),
        ) {
            let full = width_mask(width);
            let (p1, p2) = (a & full, b & full);
            let point = 1 + point_seed % (width - 1);
            let mask = width_mask(point);
            let (c1, c2) = mask_crossover(p1, p2, point, width);

            prop_assert_eq!(c1 & mask, p1 & mask);
            prop_assert_eq!(c1 & !mask & full, p2 & !mask & full);
            prop_assert_eq!(c2 & mask, p2 & mask);
            prop_assert_eq!(c2 & !mask & full, p1 & !mask & full);
            prop_assert_eq!(c1 & !full, 0);
            prop_assert_eq!(c2 & !full, 0);
        }

        #[test]
        fn prop_prefix_order_crossover_is_permutation(
            n in 3usize..40,
            seed in any::<u64>(),
            point_seed in any::<usize>(),
        ) {
            let mut rng = create_rng(seed);
            let mut a: Vec<usize> = (1..n).collect();
            let mut b: Vec<usize> = (1..n).collect();
            a.shuffle(&mut rng);
            b.shuffle(&mut rng);
            a.insert(0, 0);
            b.insert(0, 0);
            let point = 1 + point_seed % (n - 1);

            let child = prefix_order_crossover(&a, &b, point);
            prop_assert!(is_valid_permutation(&child, n));
            prop_assert_eq!(child[0], 0);
            prop_assert_eq!(&child[..point], &a[..point]);
        }
    }

    // ---- prefix order crossover ----

    #[test]
    fn test_prefix_order_crossover_fills_in_donor_order() {
        let a = [0, 1, 2, 3, 4];
        let b = [0, 4, 3, 2, 1];
        assert_eq!(prefix_order_crossover(&a, &b, 2), vec![0, 1, 4, 3, 2]);
        assert_eq!(prefix_order_crossover(&b, &a, 2), vec![0, 4, 1, 2, 3]);
    }

    #[test]
    fn test_prefix_order_crossover_full_prefix_copies_template() {
        let a = [0, 2, 1, 3];
        let b = [0, 3, 2, 1];
        assert_eq!(prefix_order_crossover(&a, &b, 4), a.to_vec());
    }

    // ---- swap mutation ----

    #[test]
    fn test_swap_never_touches_fixed_prefix() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let mut perm: Vec<usize> = (0..6).collect();
            swap_mutation(&mut perm, 1, &mut rng);
            assert_eq!(perm[0], 0);
            assert!(is_valid_permutation(&perm, 6));
            assert_ne!(perm, (0..6).collect::<Vec<_>>(), "swap must move two genes");
        }
    }

    #[test]
    fn test_swap_too_short_is_noop() {
        let mut rng = create_rng(42);
        let mut perm = vec![0, 1];
        swap_mutation(&mut perm, 1, &mut rng);
        assert_eq!(perm, vec![0, 1]);
    }
}
