//! Single-operation capability interface shared by the problem modules.

use crate::error::Error;
use crate::ga::{GaResult, Individual, Progress};
use rand::Rng;

/// A configured evolutionary solver for one problem instance.
///
/// Each problem module provides one implementation holding its problem
/// context and [`GaConfig`](crate::ga::GaConfig). Apart from this trait the
/// solvers are independent of each other.
///
/// # Examples
///
/// ```
/// use u_evolve::queens::{QueensProblem, QueensSolver};
/// use u_evolve::random::create_rng;
/// use u_evolve::Solver;
///
/// let solver = QueensSolver::new(QueensProblem::new(4)?);
/// let mut rng = create_rng(7);
/// let result = solver.run(&mut rng, |p| log::debug!("{p}"))?;
/// assert!(result.best.fitness() <= 6);
/// # Ok::<(), u_evolve::Error>(())
/// ```
pub trait Solver {
    /// Genome type returned as the best solution.
    type Individual: Individual;

    /// Runs the generational loop to completion with the given generator,
    /// reporting progress once per generation.
    fn run<R, F>(&self, rng: &mut R, on_progress: F) -> Result<GaResult<Self::Individual>, Error>
    where
        R: Rng,
        F: FnMut(&Progress<'_, Self::Individual>);
}
