//! Travelling salesman: shortest closed tour through every city.
//!
//! This is the one minimization problem in the crate. A [`Tour`] carries a
//! [`Cost`](crate::ga::Cost) (its length), so selection and replacement
//! rank lower scores first without negating anything.
//!
//! The preset run stops early when the three best tours of a generation
//! share the same cost. That is a convergence heuristic, not a proof of
//! optimality.
//!
//! ```
//! use u_evolve::random::create_rng;
//! use u_evolve::tsp::{TspProblem, TspSolver};
//! use u_evolve::Solver;
//!
//! let problem = TspProblem::new(vec![
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ])?;
//! let result = TspSolver::new(problem).run(&mut create_rng(1), |_| {})?;
//! assert_eq!(result.best.cities()[0], 0);
//! # Ok::<(), u_evolve::Error>(())
//! ```

mod problem;
mod solver;
mod types;

pub use problem::TspProblem;
pub use solver::TspSolver;
pub use types::Tour;
