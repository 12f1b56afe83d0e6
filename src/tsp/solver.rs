//! Travelling salesman solver.

use super::problem::TspProblem;
use super::types::Tour;
use crate::error::Error;
use crate::ga::{GaConfig, GaResult, GaRunner, Progress};
use crate::solver::Solver;
use rand::Rng;

/// Runs the GA on a [`TspProblem`].
#[derive(Debug, Clone)]
pub struct TspSolver {
    problem: TspProblem,
    config: GaConfig,
}

impl TspSolver {
    /// Creates a solver with [`TspProblem::default_config`].
    pub fn new(problem: TspProblem) -> Self {
        let config = problem.default_config();
        Self { problem, config }
    }

    /// Replaces the GA configuration.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// The problem instance.
    pub fn problem(&self) -> &TspProblem {
        &self.problem
    }

    /// The GA configuration used by [`Solver::run`].
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl Solver for TspSolver {
    type Individual = Tour;

    fn run<R, F>(&self, rng: &mut R, on_progress: F) -> Result<GaResult<Tour>, Error>
    where
        R: Rng,
        F: FnMut(&Progress<'_, Tour>),
    {
        log::info!("tsp: {} cities", self.problem.len());
        let result = GaRunner::run_with_rng(&self.problem, &self.config, rng, on_progress)?;
        if result.converged {
            log::debug!(
                "tsp: leading tours share cost {} after {} generations",
                result.best.length(),
                result.generations
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Cities on a line at 0, 1, ..., n-1; the best tour costs 2(n-1).
    fn line(n: usize) -> TspProblem {
        let matrix = (0..n)
            .map(|i| (0..n).map(|j| i.abs_diff(j) as f64).collect())
            .collect();
        TspProblem::new(matrix).unwrap()
    }

    #[test]
    fn test_triangle_converges_immediately() {
        init_logger();
        let problem = TspProblem::new(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .unwrap();
        let solver = TspSolver::new(problem);
        let mut rng = create_rng(42);
        let result = solver.run(&mut rng, |_| {}).unwrap();

        assert_eq!(result.best.length(), 3.0);
        assert!(result.converged);
        assert_eq!(result.generations, 1);
        assert_eq!(result.best.cities()[0], 0);
    }

    #[test]
    fn test_line_tour_improves_and_stays_valid() {
        init_logger();
        let solver = TspSolver::new(line(8));
        let mut rng = create_rng(5);
        let mut lines = Vec::new();
        let result = solver.run(&mut rng, |p| lines.push(p.to_string())).unwrap();

        assert!(result.generations <= 100);
        assert_eq!(lines.len(), result.generations + 1);
        assert!(result.best.length() >= 14.0);
        let mut cities = result.best.cities().to_vec();
        cities.sort_unstable();
        assert_eq!(cities, (0..8).collect::<Vec<_>>());
        for window in result.score_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_runs_full_cap_without_convergence_check() {
        let problem = line(6);
        let config = problem
            .default_config()
            .with_population_size(10)
            .with_convergence_leaders(0)
            .with_max_generations(30);
        let solver = TspSolver::new(problem).with_config(config);
        let result = solver.run(&mut create_rng(9), |_| {}).unwrap();

        assert_eq!(result.generations, 30);
        assert!(!result.converged);
    }
}
