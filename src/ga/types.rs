//! Core trait definitions for the GA framework.
//!
//! [`Score`] fixes the sign convention of a problem, [`Individual`] is a
//! candidate solution carrying its score, and [`GaProblem`] plugs the
//! problem-specific operators into the generic engine.

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// Which direction of a score is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Larger values are better (fitness).
    HigherIsBetter,
    /// Smaller values are better (cost).
    LowerIsBetter,
}

/// A comparable score with an explicit polarity.
///
/// The engine never negates scores. Ranking goes through
/// [`rank_cmp`](Score::rank_cmp), which already accounts for the polarity,
/// so fitness and cost problems share one generational loop.
pub trait Score: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// The sign convention of this score type.
    const POLARITY: Polarity;

    /// The worst possible score, used for unevaluated individuals.
    fn worst() -> Self;

    /// Converts the score to `f64` for thresholds and history.
    fn to_f64(self) -> f64;

    /// Ranking order: `Less` means `self` ranks ahead of `other`.
    ///
    /// Sorting a population with this comparator puts the best first.
    fn rank_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` is strictly better than `other`.
    fn is_better_than(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }

    /// Returns `true` if `self` is at least as good as a real-valued
    /// threshold, honouring the polarity.
    fn meets(self, threshold: f64) -> bool {
        match Self::POLARITY {
            Polarity::HigherIsBetter => self.to_f64() >= threshold,
            Polarity::LowerIsBetter => self.to_f64() <= threshold,
        }
    }
}

/// Non-negative fitness; higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fitness(pub u64);

impl Score for Fitness {
    const POLARITY: Polarity = Polarity::HigherIsBetter;

    fn worst() -> Self {
        Fitness(0)
    }

    fn to_f64(self) -> f64 {
        self.0 as f64
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative cost; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(pub f64);

impl Score for Cost {
    const POLARITY: Polarity = Polarity::LowerIsBetter;

    fn worst() -> Self {
        Cost(f64::INFINITY)
    }

    fn to_f64(self) -> f64 {
        self.0
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own score. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_score`](Individual::set_score).
pub trait Individual: Clone {
    /// The score type, which also fixes the polarity.
    type Score: Score;

    /// Returns the current score of this individual.
    fn score(&self) -> Self::Score;

    /// Sets the score of this individual.
    fn set_score(&mut self, score: Self::Score);
}

/// Defines a GA optimization problem.
///
/// Implementors own the read-only problem context (catalog, board size,
/// target, distance matrix). Operators receive the run's generator
/// explicitly and must not keep state between calls.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Must be pure.
    fn evaluate(&self, individual: &Self::Individual)
        -> <Self::Individual as Individual>::Score;

    /// Produces zero or more offspring by recombining two parents.
    ///
    /// Problems that reject infeasible children may return fewer than two.
    /// The default implementation clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Returns `true` if the individual meets the exact success criterion.
    ///
    /// Only consulted when [`GaConfig::stop_when_solved`](super::GaConfig)
    /// is set. The default never reports a solution.
    fn is_solved(&self, _individual: &Self::Individual) -> bool {
        false
    }
}
