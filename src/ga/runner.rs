//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → breeding → replacement → termination
//! check → repeat.

use super::config::GaConfig;
use super::types::{GaProblem, Individual, Score};
use crate::error::Error;
use crate::random::{create_rng, entropy_rng};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// Result of a GA optimization run.
///
/// Running out of generations without a solution is a normal outcome:
/// `best` then holds the best individual seen so far and `solved` is
/// `false`.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run. Not necessarily a
    /// member of the final population.
    pub best: I,

    /// Best score (same as `best.score()`).
    pub best_score: I::Score,

    /// Number of generations executed after the initial population.
    pub generations: usize,

    /// Whether the run stopped on a solved individual.
    pub solved: bool,

    /// Whether the run stopped because the leading individuals converged.
    pub converged: bool,

    /// Whether the run stopped due to stagnation.
    pub stagnated: bool,

    /// Best-so-far score after the initial population and after each
    /// generation.
    pub score_history: Vec<f64>,
}

/// Snapshot handed to the progress callback once per generation.
///
/// Generation 0 is the initial population. `Display` renders a one-line
/// status message for callers that only want text.
#[derive(Debug)]
pub struct Progress<'a, I: Individual> {
    /// Generation number, 0 for the initial population.
    pub generation: usize,
    /// Best individual seen so far.
    pub best: &'a I,
    /// Score of `best`.
    pub score: I::Score,
}

impl<I: Individual + fmt::Display> fmt::Display for Progress<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation {}: best {} (score {})",
            self.generation, self.best, self.score
        )
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config, |p| println!("{p}"))?;
/// println!("Best score: {}", result.best_score);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed` (or OS
    /// entropy when unset).
    pub fn run<P, F>(
        problem: &P,
        config: &GaConfig,
        on_progress: F,
    ) -> Result<GaResult<P::Individual>, Error>
    where
        P: GaProblem,
        F: FnMut(&Progress<'_, P::Individual>),
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng, on_progress)
    }

    /// Runs the GA with a caller-supplied generator. `config.seed` is
    /// ignored.
    pub fn run_with_rng<P, R, F>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        mut on_progress: F,
    ) -> Result<GaResult<P::Individual>, Error>
    where
        P: GaProblem,
        R: Rng,
        F: FnMut(&Progress<'_, P::Individual>),
    {
        config.validate()?;

        // 1. Initialize and evaluate population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        evaluate_population(problem, &mut population);

        // 2. Track best
        let mut best = find_best(&population).clone();
        let mut score_history = Vec::with_capacity(config.max_generations + 1);
        score_history.push(best.score().to_f64());
        on_progress(&Progress {
            generation: 0,
            best: &best,
            score: best.score(),
        });
        log::info!(
            "starting run: population {}, up to {} generations, initial best {}",
            config.population_size,
            config.max_generations,
            best.score()
        );

        let mut solved = config.stop_when_solved && problem.is_solved(&best);
        let mut converged = false;
        let mut stagnated = false;
        let mut generations = 0usize;
        let mut stagnation_counter = 0usize;

        // 3. Evolutionary loop
        if !solved {
            for gen in 1..=config.max_generations {
                let mut pool = config.breeding.breed(problem, &population, config, rng);
                evaluate_population(problem, &mut pool);

                let improved = match pool.iter().min_by(|a, b| a.score().rank_cmp(&b.score())) {
                    Some(candidate) if candidate.score().is_better_than(&best.score()) => {
                        best = candidate.clone();
                        true
                    }
                    _ => false,
                };
                if improved {
                    stagnation_counter = 0;
                } else {
                    stagnation_counter += 1;
                }

                population = config
                    .replacement
                    .replace(population, pool, config.population_size);
                debug_assert_eq!(population.len(), config.population_size);

                generations = gen;
                score_history.push(best.score().to_f64());
                on_progress(&Progress {
                    generation: gen,
                    best: &best,
                    score: best.score(),
                });
                log::debug!(
                    "generation {gen}: best {}, population leader {}",
                    best.score(),
                    find_best(&population).score()
                );

                if config.stop_when_solved && problem.is_solved(&best) {
                    solved = true;
                    break;
                }
                if leaders_converged(&population, config.convergence_leaders) {
                    converged = true;
                    break;
                }
                if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                    stagnated = true;
                    break;
                }
            }
        }

        log::info!(
            "run finished after {generations} generations: best {} (solved: {solved}, converged: {converged}, stagnated: {stagnated})",
            best.score()
        );

        Ok(GaResult {
            best_score: best.score(),
            best,
            generations,
            solved,
            converged,
            stagnated,
            score_history,
        })
    }
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let score = problem.evaluate(ind);
        ind.set_score(score);
    }
}

/// Find the best individual; the first one wins ties.
fn find_best<I: Individual>(population: &[I]) -> &I {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.score().is_better_than(&best.score()) {
            best = ind;
        }
    }
    best
}

/// Returns `true` when the top `k` ranked individuals share one score.
///
/// Values of `k` below 2 disable the check.
fn leaders_converged<I: Individual>(population: &[I], k: usize) -> bool {
    if k < 2 || population.len() < k {
        return false;
    }
    let mut scores: Vec<I::Score> = population.iter().map(|ind| ind.score()).collect();
    scores.sort_by(|a, b| a.rank_cmp(b));
    scores[1..k]
        .iter()
        .all(|s| s.rank_cmp(&scores[0]) == Ordering::Equal)
}

// ============================================================================
// Tests
// ============================================================================
