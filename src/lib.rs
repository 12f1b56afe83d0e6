//! Generic evolutionary search engine with four problem instantiations.
//!
//! The [`ga`] module holds the domain-agnostic generational loop with
//! pluggable operators:
//!
//! - **Selection**: how single parents are drawn ([`ga::Selection`])
//! - **Breeding**: how a generation's parents are paired into a candidate
//!   pool ([`ga::Breeding`])
//! - **Replacement**: how the next population is formed from the pool
//!   ([`ga::Replacement`])
//! - **Termination**: generation cap, solved individual, converged leaders
//!   or stagnation ([`ga::GaConfig`])
//!
//! Each problem module supplies a genome, a [`ga::GaProblem`]
//! implementation with a preset configuration, and a [`Solver`]:
//!
//! | Module        | Genome                      | Score                  |
//! |---------------|-----------------------------|------------------------|
//! | [`knapsack`]  | item bitmask                | worth, higher is better |
//! | [`queens`]    | row per column              | non-attacking pairs, higher is better |
//! | [`rebuild`]   | character sequence          | matching positions, higher is better |
//! | [`tsp`]       | city permutation from 0     | tour length, lower is better |
//!
//! Score polarity is explicit in the type: [`ga::Fitness`] ranks higher
//! values first and [`ga::Cost`] ranks lower values first. Costs are never
//! negated into fitness.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: run start and end at `info`,
//! each generation at `debug`, and exhausted breeding caps at `warn`.

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod queens;
pub mod random;
pub mod rebuild;
pub mod solver;
pub mod tsp;

pub use error::Error;
pub use solver::Solver;
