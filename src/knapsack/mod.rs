//! 0/1 knapsack: pick a subset of catalog items maximizing total worth
//! without exceeding the weight capacity.
//!
//! # Encoding
//!
//! A [`KnapsackGenome`] is a bitmask with one bit per catalog item (at most
//! [`MAX_ITEMS`]). Its fitness is the packed worth.
//!
//! # Capacity policy
//!
//! Overweight genomes are rejected rather than penalized: initial genomes
//! are packed by bounded random repair, overweight crossover children are
//! dropped and overweight mutations are discarded. See
//! [`KnapsackProblem`] for the repair cap.
//!
//! # Example
//!
//! ```
//! use u_evolve::knapsack::{Item, KnapsackProblem, KnapsackSolver};
//! use u_evolve::random::create_rng;
//! use u_evolve::Solver;
//!
//! let problem = KnapsackProblem::new(
//!     vec![Item::new("tent", 5, 10), Item::new("stove", 5, 10), Item::new("chair", 8, 1)],
//!     10,
//! )?;
//! let config = problem.default_config().with_max_generations(20);
//! let solver = KnapsackSolver::new(problem).with_config(config);
//! let result = solver.run(&mut create_rng(1), |_| {})?;
//! assert!(result.best.total_weight() <= 10);
//! # Ok::<(), u_evolve::Error>(())
//! ```

mod problem;
mod solver;
mod types;

pub use problem::{KnapsackProblem, MAX_ITEMS};
pub use solver::KnapsackSolver;
pub use types::{Item, KnapsackGenome};
