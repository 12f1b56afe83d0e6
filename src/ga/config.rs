//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Problem modules ship presets (`KnapsackProblem::default_config()` and
//! friends) built on top of it.

use super::breeding::Breeding;
use super::replacement::Replacement;
use super::selection::Selection;
use crate::error::Error;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{Breeding, GaConfig, Replacement, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Roulette)
///     .with_breeding(Breeding::Paired)
///     .with_replacement(Replacement::Elitist)
///     .with_mutation_rate(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in the population. Held constant across
    /// generations.
    pub population_size: usize,

    /// Hard cap on the number of generations. Every run terminates after
    /// at most this many generations.
    pub max_generations: usize,

    /// Parent picker used by [`Breeding::Paired`] and
    /// [`Breeding::SinglePair`].
    pub selection: Selection,

    /// How parents are chosen and paired to fill the candidate pool.
    pub breeding: Breeding,

    /// How the candidate pool becomes the next population.
    pub replacement: Replacement,

    /// Probability of applying crossover (0.0–1.0).
    ///
    /// For [`Breeding::Threshold`] this is the per-genome eligibility draw.
    pub crossover_rate: f64,

    /// Probability of applying mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Stop as soon as the best individual satisfies
    /// [`GaProblem::is_solved`](super::GaProblem::is_solved).
    pub stop_when_solved: bool,

    /// Stop when the top `k` ranked individuals share the same score.
    ///
    /// A convergence proxy, not a proof of optimality. Set to 0 to disable.
    pub convergence_leaders: usize,

    /// Number of generations without improvement of the best-so-far before
    /// stopping. Set to 0 to disable.
    pub stagnation_limit: usize,

    /// Cap on full population scans per generation for
    /// [`Breeding::Threshold`]. A short pool is topped up with clones of the
    /// current population once the cap is reached. Must be at least 1.
    pub max_breeding_passes: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            selection: Selection::default(),
            breeding: Breeding::default(),
            replacement: Replacement::default(),
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            stop_when_solved: true,
            convergence_leaders: 0,
            stagnation_limit: 0,
            max_breeding_passes: 1000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the breeding scheme.
    pub fn with_breeding(mut self, breeding: Breeding) -> Self {
        self.breeding = breeding;
        self
    }

    /// Sets the replacement policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables early exit on a solved individual.
    pub fn with_stop_when_solved(mut self, stop: bool) -> Self {
        self.stop_when_solved = stop;
        self
    }

    /// Sets the number of equal-score leaders that signal convergence
    /// (0 to disable).
    pub fn with_convergence_leaders(mut self, k: usize) -> Self {
        self.convergence_leaders = k;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the cap on threshold-breeding scan passes.
    pub fn with_max_breeding_passes(mut self, passes: usize) -> Self {
        self.max_breeding_passes = passes.max(1);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 2 {
            return Err(Error::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(Error::ZeroGenerations);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::RateOutOfRange { name, value });
            }
        }
        if self.convergence_leaders > self.population_size {
            return Err(Error::TooManyLeaders {
                leaders: self.convergence_leaders,
                population: self.population_size,
            });
        }
        if self.max_breeding_passes == 0 {
            return Err(Error::ZeroBreedingPasses);
        }
        Ok(())
    }
}
