//! String rebuilding solver.

use super::problem::RebuildProblem;
use super::types::Candidate;
use crate::error::Error;
use crate::ga::{GaConfig, GaResult, GaRunner, Progress};
use crate::solver::Solver;
use rand::Rng;

/// Runs the GA on a [`RebuildProblem`].
#[derive(Debug, Clone)]
pub struct RebuildSolver {
    problem: RebuildProblem,
    config: GaConfig,
}

impl RebuildSolver {
    /// Creates a solver with [`RebuildProblem::default_config`].
    pub fn new(problem: RebuildProblem) -> Self {
        let config = problem.default_config();
        Self { problem, config }
    }

    /// Replaces the GA configuration.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// The problem instance.
    pub fn problem(&self) -> &RebuildProblem {
        &self.problem
    }

    /// The GA configuration used by [`Solver::run`].
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl Solver for RebuildSolver {
    type Individual = Candidate;

    fn run<R, F>(&self, rng: &mut R, on_progress: F) -> Result<GaResult<Candidate>, Error>
    where
        R: Rng,
        F: FnMut(&Progress<'_, Candidate>),
    {
        log::info!(
            "rebuild: target of {} characters, per-character mutation rate {}",
            self.problem.target_len(),
            self.problem.mutation_rate()
        );
        GaRunner::run_with_rng(&self.problem, &self.config, rng, on_progress)
    }
}
