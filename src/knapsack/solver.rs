//! Knapsack solver.

use super::problem::KnapsackProblem;
use super::types::KnapsackGenome;
use crate::error::Error;
use crate::ga::{GaConfig, GaResult, GaRunner, Progress};
use crate::solver::Solver;
use rand::Rng;

/// Runs the GA on a [`KnapsackProblem`].
#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    problem: KnapsackProblem,
    config: GaConfig,
}

impl KnapsackSolver {
    /// Creates a solver with [`KnapsackProblem::default_config`].
    pub fn new(problem: KnapsackProblem) -> Self {
        let config = problem.default_config();
        Self { problem, config }
    }

    /// Replaces the GA configuration.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// The problem instance.
    pub fn problem(&self) -> &KnapsackProblem {
        &self.problem
    }

    /// The GA configuration used by [`Solver::run`].
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl Solver for KnapsackSolver {
    type Individual = KnapsackGenome;

    fn run<R, F>(&self, rng: &mut R, on_progress: F) -> Result<GaResult<KnapsackGenome>, Error>
    where
        R: Rng,
        F: FnMut(&Progress<'_, KnapsackGenome>),
    {
        log::info!(
            "knapsack: {} items, capacity {}",
            self.problem.catalog().len(),
            self.problem.capacity()
        );
        GaRunner::run_with_rng(&self.problem, &self.config, rng, on_progress)
    }
}
