//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. Problems plug in
//! by implementing [`GaProblem`], which specifies how to create, evaluate,
//! cross over and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Score`]: a comparable score with an explicit polarity
//!   ([`Fitness`] is higher-is-better, [`Cost`] is lower-is-better)
//! - [`Individual`]: a candidate solution carrying its score
//! - [`GaProblem`]: problem definition: initialization, evaluation and operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters and termination caps
//! - [`Selection`], [`Breeding`], [`Replacement`]: the pluggable stages of a
//!   generation
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`] / [`Progress`]: final result and per-generation snapshot
//!
//! # Submodules
//!
//! - [`operators`]: splice, bitmask and prefix-order crossover; swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod breeding;
mod config;
pub mod operators;
mod replacement;
mod runner;
mod selection;
mod types;

pub use breeding::{mean_threshold, Breeding};
pub use config::GaConfig;
pub use replacement::Replacement;
pub use runner::{GaResult, GaRunner, Progress};
pub use selection::Selection;
pub use types::{Cost, Fitness, GaProblem, Individual, Polarity, Score};
