//! N-queens solver.

use super::problem::QueensProblem;
use super::types::Board;
use crate::error::Error;
use crate::ga::{GaConfig, GaResult, GaRunner, Progress};
use crate::solver::Solver;
use rand::Rng;

/// Runs the GA on a [`QueensProblem`].
#[derive(Debug, Clone)]
pub struct QueensSolver {
    problem: QueensProblem,
    config: GaConfig,
}

impl QueensSolver {
    /// Creates a solver with [`QueensProblem::default_config`].
    pub fn new(problem: QueensProblem) -> Self {
        let config = problem.default_config();
        Self { problem, config }
    }

    /// Replaces the GA configuration.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// The problem instance.
    pub fn problem(&self) -> &QueensProblem {
        &self.problem
    }

    /// The GA configuration used by [`Solver::run`].
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl Solver for QueensSolver {
    type Individual = Board;

    fn run<R, F>(&self, rng: &mut R, on_progress: F) -> Result<GaResult<Board>, Error>
    where
        R: Rng,
        F: FnMut(&Progress<'_, Board>),
    {
        log::info!("queens: n = {}", self.problem.n());
        let result = GaRunner::run_with_rng(&self.problem, &self.config, rng, on_progress)?;
        if result.solved {
            log::debug!("queens solution:\n{}", result.best.render());
        }
        Ok(result)
    }
}
