//! N-queens: place `n` queens on an `n × n` board with no two attacking.
//!
//! A [`Board`] holds one queen per column. Its fitness counts the
//! non-attacking pairs, so a board is solved exactly when its fitness is
//! [`max_fitness`]`(n)` = `n(n-1)/2`.
//!
//! # Example
//!
//! ```
//! use u_evolve::queens::{QueensProblem, QueensSolver};
//! use u_evolve::random::create_rng;
//! use u_evolve::Solver;
//!
//! let solver = QueensSolver::new(QueensProblem::new(6)?);
//! let result = solver.run(&mut create_rng(3), |_| {})?;
//! if result.solved {
//!     println!("{}", result.best.render());
//! }
//! # Ok::<(), u_evolve::Error>(())
//! ```

mod problem;
mod solver;
mod types;

pub use problem::QueensProblem;
pub use solver::QueensSolver;
pub use types::{max_fitness, non_attacking_pairs, Board};
