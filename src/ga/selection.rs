//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Every strategy ranks through [`Score::rank_cmp`], so the same
//! code serves fitness (higher is better) and cost (lower is better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Individual, Polarity, Score};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
///
/// // Fitness-proportionate, as used for N-queens
/// let sel = Selection::Roulette;
///
/// // Uniform, as used for the travelling salesman pair draw
/// let sel = Selection::Uniform;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: pick `k` individuals at random, keep the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Draws `r` in `[0, total)` and walks the population subtracting each
    /// weight until `r` falls below the current weight. Fitness scores are
    /// used as weights directly; costs are inverted against the worst cost.
    /// An all-zero total falls back to a uniform pick.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear rank-based selection.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,

    /// Uniform random pick, no fitness weighting.
    Uniform,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty. The runner validates the population
    /// size before any selection happens.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
            Selection::Uniform => rng.random_range(0..population.len()),
        }
    }

    /// Select two distinct parent indices.
    ///
    /// Weighted strategies get a bounded number of redraws for the second
    /// parent; if they keep hitting the first one, the second index is drawn
    /// uniformly from the remaining individuals.
    ///
    /// # Panics
    /// Panics if `population` holds fewer than two individuals.
    pub fn select_pair<I: Individual, R: Rng>(
        &self,
        population: &[I],
        rng: &mut R,
    ) -> (usize, usize) {
        let n = population.len();
        assert!(n >= 2, "pair selection needs at least two individuals");

        let first = self.select(population, rng);
        if *self != Selection::Uniform {
            for _ in 0..n {
                let second = self.select(population, rng);
                if second != first {
                    return (first, second);
                }
            }
        }
        let mut second = rng.random_range(0..n - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }
}

/// Tournament selection: pick k random individuals, return best.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx]
            .score()
            .is_better_than(&population[best_idx].score())
        {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel weights for the population.
///
/// Fitness scores are weights as-is (clamped at zero). Costs become
/// `max_cost - cost + epsilon` so the cheapest individual weighs most.
fn roulette_weights<I: Individual>(population: &[I]) -> Vec<f64> {
    let raw: Vec<f64> = population.iter().map(|ind| ind.score().to_f64()).collect();

    match <I::Score as Score>::POLARITY {
        Polarity::HigherIsBetter => raw
            .into_iter()
            .map(|f| if f.is_finite() && f > 0.0 { f } else { 0.0 })
            .collect(),
        Polarity::LowerIsBetter => {
            let epsilon = 1e-10;
            let max_cost = raw
                .iter()
                .copied()
                .filter(|c| c.is_finite())
                .fold(f64::NEG_INFINITY, f64::max);
            raw.into_iter()
                .map(|c| {
                    let w = max_cost - c + epsilon;
                    if w.is_finite() && w > 0.0 {
                        w
                    } else {
                        epsilon
                    }
                })
                .collect()
        }
    }
}

/// Roulette wheel selection by subtraction walk.
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let weights = roulette_weights(population);
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let mut remaining = rng.random_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        if remaining < w {
            return i;
        }
        remaining -= w;
    }

    // floating-point fallback: last individual with non-zero weight
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}

/// Rank-based selection using linear ranking.
///
/// Individuals are sorted best first, then selection probability is
/// proportional to `n - rank`.
fn rank<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| population[a].score().rank_cmp(&population[b].score()));

    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}
