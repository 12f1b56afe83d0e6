//! Tour genome.

use crate::ga::{Cost, Individual};
use std::fmt;

/// A closed tour: a permutation of the city indices that starts at city 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub(crate) cities: Vec<usize>,
    pub(crate) cost: Cost,
}

impl Tour {
    /// Wraps a visiting order into an unevaluated tour.
    pub fn new(cities: Vec<usize>) -> Self {
        Self {
            cities,
            cost: Cost(f64::INFINITY),
        }
    }

    /// Visiting order, starting with city 0.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Tour length assigned at the last evaluation, including the closing
    /// edge back to the start.
    pub fn length(&self) -> f64 {
        self.cost.0
    }
}

impl Individual for Tour {
    type Score = Cost;

    fn score(&self) -> Cost {
        self.cost
    }

    fn set_score(&mut self, cost: Cost) {
        self.cost = cost;
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.cities {
            write!(f, "{city} -> ")?;
        }
        match self.cities.first() {
            Some(start) => write!(f, "{start}"),
            None => Ok(()),
        }
    }
}
