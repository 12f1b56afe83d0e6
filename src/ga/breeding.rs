//! Breeding schemes: how one evaluated population becomes a pool of
//! offspring candidates.
//!
//! The pool is handed to [`Replacement`](super::Replacement), which owns
//! the population-size invariant. A scheme that cannot fill the pool within
//! its attempt cap returns a short pool rather than looping.

use super::config::GaConfig;
use super::types::{GaProblem, Individual, Score};
use rand::Rng;

/// How parents are chosen and paired in each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breeding {
    /// Threshold-probabilistic scan.
    ///
    /// A genome is crossover-eligible when its score is at least as good as
    /// the population threshold (see [`mean_threshold`]) and a draw falls
    /// below `crossover_rate`. Eligible genomes pair up in encounter order.
    /// Independently, every genome spawns a mutated copy when a second draw
    /// falls below `mutation_rate`. The population is rescanned until the
    /// pool is full or `max_breeding_passes` is reached.
    Threshold,

    /// Each step picks two parents with the configured
    /// [`Selection`](super::Selection), crosses them with probability
    /// `crossover_rate` and mutates each child with probability
    /// `mutation_rate`.
    #[default]
    Paired,

    /// Ranks the population best first and crosses neighbours `(i, i + 1)`
    /// in both parent orders, wrapping around until the pool is full.
    RankedPairs,

    /// One distinct parent pair per generation, chosen with the configured
    /// selection. Meant for [`Replacement::Merge`](super::Replacement::Merge).
    SinglePair,
}

/// Population-wide crossover threshold: the mean score of the genomes
/// whose score is non-zero.
///
/// Returns `0.0` when every genome scores zero, so the threshold is always
/// finite.
pub fn mean_threshold<I: Individual>(population: &[I]) -> f64 {
    let (sum, count) = population
        .iter()
        .map(|ind| ind.score().to_f64())
        .filter(|s| *s != 0.0 && s.is_finite())
        .fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl Breeding {
    /// Produces the offspring pool for one generation.
    ///
    /// `population` must be evaluated. Returned individuals are not.
    pub fn breed<P: GaProblem, R: Rng>(
        &self,
        problem: &P,
        population: &[P::Individual],
        config: &GaConfig,
        rng: &mut R,
    ) -> Vec<P::Individual> {
        match self {
            Breeding::Threshold => threshold(problem, population, config, rng),
            Breeding::Paired => paired(problem, population, config, rng),
            Breeding::RankedPairs => ranked_pairs(problem, population, config, rng),
            Breeding::SinglePair => single_pair(problem, population, config, rng),
        }
    }
}

fn maybe_mutate<P: GaProblem, R: Rng>(
    problem: &P,
    child: &mut P::Individual,
    config: &GaConfig,
    rng: &mut R,
) {
    if rng.random_bool(config.mutation_rate) {
        problem.mutate(child, rng);
    }
}

fn threshold<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let target = config.population_size;
    let threshold = mean_threshold(population);
    let mut pool = Vec::with_capacity(target + 2);
    let mut partner: Option<usize> = None;
    let mut passes = 0;

    while pool.len() < target && passes < config.max_breeding_passes {
        passes += 1;
        for (m, genome) in population.iter().enumerate() {
            if pool.len() >= target {
                break;
            }

            if genome.score().meets(threshold) && rng.random_bool(config.crossover_rate) {
                match partner.take() {
                    None => partner = Some(m),
                    Some(p) => pool.extend(problem.crossover(&population[p], genome, rng)),
                }
            }

            if rng.random_bool(config.mutation_rate) {
                let mut mutant = genome.clone();
                problem.mutate(&mut mutant, rng);
                pool.push(mutant);
            }
        }
    }

    if pool.len() < target {
        log::warn!(
            "threshold breeding stopped after {passes} passes with {}/{target} offspring",
            pool.len()
        );
    }
    pool
}

fn paired<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let target = config.population_size;
    let max_attempts = target.saturating_mul(config.max_breeding_passes);
    let mut pool = Vec::with_capacity(target);
    let mut attempts = 0;

    while pool.len() < target && attempts < max_attempts {
        attempts += 1;
        let a = config.selection.select(population, rng);
        let b = config.selection.select(population, rng);

        let children = if rng.random_bool(config.crossover_rate) {
            problem.crossover(&population[a], &population[b], rng)
        } else {
            vec![population[a].clone()]
        };

        for mut child in children {
            if pool.len() >= target {
                break;
            }
            maybe_mutate(problem, &mut child, config, rng);
            pool.push(child);
        }
    }

    if pool.len() < target {
        log::warn!(
            "paired breeding gave up after {attempts} attempts with {}/{target} offspring",
            pool.len()
        );
    }
    pool
}

fn ranked_pairs<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let target = config.population_size;
    let n = population.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| population[a].score().rank_cmp(&population[b].score()));

    let max_attempts = target.saturating_mul(config.max_breeding_passes);
    let mut pool = Vec::with_capacity(target + 1);
    let mut i = 0;

    while pool.len() < target && i < max_attempts {
        let slot = i % (n - 1);
        i += 1;
        let first = &population[order[slot]];
        let second = &population[order[slot + 1]];

        for (x, y) in [(first, second), (second, first)] {
            let children = if rng.random_bool(config.crossover_rate) {
                problem.crossover(x, y, rng)
            } else {
                vec![x.clone()]
            };
            for mut child in children {
                maybe_mutate(problem, &mut child, config, rng);
                pool.push(child);
            }
        }
    }

    pool
}

fn single_pair<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let (a, b) = config.selection.select_pair(population, rng);

    let children = if rng.random_bool(config.crossover_rate) {
        problem.crossover(&population[a], &population[b], rng)
    } else {
        vec![population[a].clone(), population[b].clone()]
    };

    children
        .into_iter()
        .map(|mut child| {
            maybe_mutate(problem, &mut child, config, rng);
            child
        })
        .collect()
}
