//! Travelling salesman problem definition.

use super::types::Tour;
use crate::error::Error;
use crate::ga::operators::{prefix_order_crossover, swap_mutation};
use crate::ga::{Breeding, Cost, GaConfig, GaProblem, Replacement, Selection};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shortest closed tour over a distance matrix, starting and ending at
/// city 0.
///
/// The matrix need not be symmetric: `distances[i][j]` is the cost of the
/// edge from `i` to `j`.
#[derive(Debug, Clone)]
pub struct TspProblem {
    distances: Vec<Vec<f64>>,
}

impl TspProblem {
    /// Smallest instance with more than one possible tour.
    pub const MIN_CITIES: usize = 3;

    /// # Errors
    /// Fails with fewer than [`Self::MIN_CITIES`] cities, a non-square
    /// matrix, or a negative or non-finite distance.
    pub fn new(distances: Vec<Vec<f64>>) -> Result<Self, Error> {
        let n = distances.len();
        if n < Self::MIN_CITIES {
            return Err(Error::TooFewCities(n));
        }
        for (from, row) in distances.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NonSquareMatrix {
                    row: from,
                    len: row.len(),
                    expected: n,
                });
            }
            if let Some(to) = row.iter().position(|d| !d.is_finite() || *d < 0.0) {
                return Err(Error::InvalidDistance { from, to });
            }
        }
        Ok(Self { distances })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always `false` for a validated instance.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Edge cost from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from][to]
    }

    /// Length of a closed tour: every consecutive edge plus the edge from
    /// the last city back to the first.
    pub fn tour_length(&self, cities: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (cities.first(), cities.last()) else {
            return 0.0;
        };
        let path: f64 = cities
            .windows(2)
            .map(|edge| self.distances[edge[0]][edge[1]])
            .sum();
        path + self.distances[last][first]
    }

    /// Preset configuration: one uniformly drawn pair per generation, both
    /// children merged into the population, at most 100 generations, and
    /// an early exit once the three best tours cost the same.
    pub fn default_config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(100)
            .with_max_generations(100)
            .with_selection(Selection::Uniform)
            .with_breeding(Breeding::SinglePair)
            .with_replacement(Replacement::Merge)
            .with_crossover_rate(1.0)
            .with_mutation_rate(0.1)
            .with_stop_when_solved(false)
            .with_convergence_leaders(3)
    }
}

impl GaProblem for TspProblem {
    type Individual = Tour;

    /// City 0 followed by a random order of the remaining cities.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut cities: Vec<usize> = (0..self.len()).collect();
        cities[1..].shuffle(rng);
        Tour::new(cities)
    }

    fn evaluate(&self, tour: &Tour) -> Cost {
        Cost(self.tour_length(&tour.cities))
    }

    /// Two children by prefix order crossover, one per parent role, with a
    /// shared cut point in `[1, n)`.
    fn crossover<R: Rng>(&self, parent_a: &Tour, parent_b: &Tour, rng: &mut R) -> Vec<Tour> {
        let point = rng.random_range(1..self.len());
        vec![
            Tour::new(prefix_order_crossover(&parent_a.cities, &parent_b.cities, point)),
            Tour::new(prefix_order_crossover(&parent_b.cities, &parent_a.cities, point)),
        ]
    }

    /// Swaps two distinct cities, never the start city.
    fn mutate<R: Rng>(&self, tour: &mut Tour, rng: &mut R) {
        swap_mutation(&mut tour.cities, 1, rng);
    }
}
