//! String rebuilding: evolve random strings until they spell a target.
//!
//! A [`Candidate`] is scored by the number of positions where it agrees
//! with the target. Deletion mutations can make candidates shorter than the
//! target; scoring only pairs up the overlapping positions.
//!
//! ```
//! use u_evolve::rebuild::{RebuildProblem, RebuildSolver};
//! use u_evolve::random::create_rng;
//! use u_evolve::Solver;
//!
//! let solver = RebuildSolver::new(RebuildProblem::new("GA")?);
//! let result = solver.run(&mut create_rng(5), |p| println!("{p}"))?;
//! assert!(result.best.fitness() <= 2);
//! # Ok::<(), u_evolve::Error>(())
//! ```

mod problem;
mod solver;
mod types;

pub use problem::{RebuildProblem, ALPHANUMERIC};
pub use solver::RebuildSolver;
pub use types::{positional_matches, Candidate};
