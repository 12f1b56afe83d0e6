//! Knapsack catalog items and the bitmask genome.

use crate::ga::{Fitness, Individual};
use std::fmt;
use std::sync::Arc;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Weight counted against the capacity.
    pub weight: u64,
    /// Worth contributed to the fitness.
    pub worth: u64,
}

impl Item {
    /// Creates a catalog item.
    pub fn new(name: impl Into<String>, weight: u64, worth: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            worth,
        }
    }
}

/// A subset of the catalog encoded as a bitmask.
///
/// Bit `i` set means catalog item `i` is packed. The mask is exactly as
/// wide as the catalog; higher bits are always zero. The genome shares the
/// read-only catalog so the picked items can be decoded without the
/// problem at hand.
#[derive(Debug, Clone)]
pub struct KnapsackGenome {
    pub(crate) bits: u64,
    pub(crate) catalog: Arc<[Item]>,
    pub(crate) fitness: Fitness,
}

impl KnapsackGenome {
    /// The raw bitmask.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Width of the bitmask, equal to the catalog size.
    pub fn width(&self) -> u32 {
        self.catalog.len() as u32
    }

    /// Fitness assigned at the last evaluation.
    pub fn fitness(&self) -> u64 {
        self.fitness.0
    }

    /// Catalog indices of the picked items, ascending.
    pub fn picked_indices(&self) -> Vec<usize> {
        (0..self.catalog.len())
            .filter(|&i| self.bits & (1u64 << i) != 0)
            .collect()
    }

    /// The picked items in catalog order.
    pub fn picked_items(&self) -> Vec<&Item> {
        self.picked_indices()
            .into_iter()
            .map(|i| &self.catalog[i])
            .collect()
    }

    /// Summed weight of the picked items.
    pub fn total_weight(&self) -> u64 {
        self.picked_items().iter().map(|item| item.weight).sum()
    }

    /// Summed worth of the picked items.
    pub fn total_worth(&self) -> u64 {
        self.picked_items().iter().map(|item| item.worth).sum()
    }
}

impl Individual for KnapsackGenome {
    type Score = Fitness;

    fn score(&self) -> Fitness {
        self.fitness
    }

    fn set_score(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }
}

impl fmt::Display for KnapsackGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .picked_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        write!(
            f,
            "[{}] (weight {}, worth {})",
            names.join(", "),
            self.total_weight(),
            self.total_worth()
        )
    }
}
