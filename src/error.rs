//! Error type shared by the engine and the problem modules.

/// Errors raised when a run is configured with parameters that break an
/// engine or problem invariant.
///
/// A correctly configured run never fails: "no solution within the
/// generation cap" is reported through [`GaResult`](crate::ga::GaResult),
/// not through this type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("convergence_leaders ({leaders}) exceeds population_size ({population})")]
    TooManyLeaders { leaders: usize, population: usize },
    #[error("max_breeding_passes must be at least 1")]
    ZeroBreedingPasses,

    #[error("item catalog is empty")]
    EmptyCatalog,
    #[error("item catalog holds {0} items, at most 64 are supported")]
    CatalogTooLarge(usize),
    #[error("knapsack capacity must be positive")]
    ZeroCapacity,

    #[error("at least 4 queens are required, got {0}")]
    TooFewQueens(usize),

    #[error("target string is empty")]
    EmptyTarget,
    #[error("character {0:?} is outside the printable ASCII range")]
    DisallowedCharacter(char),
    #[error("initialization alphabet is empty")]
    EmptyAlphabet,

    #[error("at least 3 cities are required, got {0}")]
    TooFewCities(usize),
    #[error("distance matrix row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix { row: usize, len: usize, expected: usize },
    #[error("distance from city {from} to city {to} is negative or not finite")]
    InvalidDistance { from: usize, to: usize },
}
