//! Knapsack problem definition.
//!
//! Capacity is enforced strictly: no operator ever yields an overweight
//! genome. Initial genomes are packed by bounded random repair, crossover
//! drops overweight children, and an overweight mutation is discarded.
//! Fitness is then simply the packed worth.

use super::types::{Item, KnapsackGenome};
use crate::error::Error;
use crate::ga::operators::{mask_crossover, width_mask};
use crate::ga::{Breeding, Fitness, GaConfig, GaProblem, Replacement, Selection};
use rand::Rng;
use std::sync::Arc;

/// Upper bound on the catalog size (one bit per item in a `u64`).
pub const MAX_ITEMS: usize = 64;

/// A 0/1 knapsack instance: a catalog and a weight capacity.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: Arc<[Item]>,
    capacity: u64,
    max_repair_attempts: usize,
}

impl KnapsackProblem {
    /// Creates a knapsack instance.
    ///
    /// # Errors
    /// Fails on an empty catalog, a catalog larger than [`MAX_ITEMS`], or a
    /// zero capacity.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, Error> {
        if items.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if items.len() > MAX_ITEMS {
            return Err(Error::CatalogTooLarge(items.len()));
        }
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            catalog: items.into(),
            capacity,
            max_repair_attempts: 1000,
        })
    }

    /// Generates a random catalog of `count` items (weights 1..=50, worth
    /// 0..=100) with a capacity of a third of the total weight.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Result<Self, Error> {
        let items: Vec<Item> = (0..count)
            .map(|i| {
                Item::new(
                    format!("Item_{}", i + 1),
                    rng.random_range(1..=50),
                    rng.random_range(0..=100),
                )
            })
            .collect();
        let capacity = (items.iter().map(|item| item.weight).sum::<u64>() / 3).max(1);
        Self::new(items, capacity)
    }

    /// Sets the number of random picks tried when packing an initial
    /// genome.
    pub fn with_max_repair_attempts(mut self, attempts: usize) -> Self {
        self.max_repair_attempts = attempts;
        self
    }

    /// The item catalog.
    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    /// The weight capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Summed weight of the whole catalog.
    pub fn catalog_weight(&self) -> u64 {
        self.catalog.iter().map(|item| item.weight).sum()
    }

    /// Summed worth of the whole catalog.
    pub fn catalog_worth(&self) -> u64 {
        self.catalog.iter().map(|item| item.worth).sum()
    }

    fn width(&self) -> u32 {
        self.catalog.len() as u32
    }

    /// Summed weight of the items selected by `bits`.
    pub fn weight_of(&self, bits: u64) -> u64 {
        self.sum_over(bits, |item| item.weight)
    }

    /// Summed worth of the items selected by `bits`.
    pub fn worth_of(&self, bits: u64) -> u64 {
        self.sum_over(bits, |item| item.worth)
    }

    fn sum_over(&self, bits: u64, field: impl Fn(&Item) -> u64) -> u64 {
        self.catalog
            .iter()
            .enumerate()
            .filter(|(i, _)| bits & (1u64 << i) != 0)
            .map(|(_, item)| field(item))
            .sum()
    }

    /// Wraps a bitmask into an unevaluated genome. Bits beyond the catalog
    /// width are dropped.
    pub fn genome(&self, bits: u64) -> KnapsackGenome {
        KnapsackGenome {
            bits: bits & width_mask(self.width()),
            catalog: Arc::clone(&self.catalog),
            fitness: Fitness(0),
        }
    }

    fn fits(&self, bits: u64) -> bool {
        self.weight_of(bits) <= self.capacity
    }

    /// Preset configuration: threshold breeding with elitist truncation.
    ///
    /// Population 100, 500 generations, crossover 0.8, mutation 0.03. There
    /// is no exact success criterion, so every run uses the full cap.
    pub fn default_config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(100)
            .with_max_generations(500)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.03)
            .with_selection(Selection::Roulette)
            .with_breeding(Breeding::Threshold)
            .with_replacement(Replacement::Elitist)
            .with_stop_when_solved(false)
    }
}

impl GaProblem for KnapsackProblem {
    type Individual = KnapsackGenome;

    /// Packs random items while they fit, for at most
    /// `max_repair_attempts` picks. The result may stay under capacity.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> KnapsackGenome {
        let full = width_mask(self.width());
        let mut bits = 0u64;
        let mut remaining = self.capacity;

        for _ in 0..self.max_repair_attempts {
            if bits == full {
                break;
            }
            let idx = rng.random_range(0..self.catalog.len());
            let bit = 1u64 << idx;
            let weight = self.catalog[idx].weight;
            if bits & bit == 0 && weight <= remaining {
                bits |= bit;
                remaining -= weight;
            }
        }

        self.genome(bits)
    }

    fn evaluate(&self, genome: &KnapsackGenome) -> Fitness {
        if self.fits(genome.bits) {
            Fitness(self.worth_of(genome.bits))
        } else {
            Fitness(0)
        }
    }

    /// One-point bitmask crossover; overweight children are dropped.
    ///
    /// The children together hold exactly the parents' bits, so both are
    /// empty only when both parents are. No cut point can change that: the
    /// parents are then returned unchanged without drawing.
    fn crossover<R: Rng>(
        &self,
        parent1: &KnapsackGenome,
        parent2: &KnapsackGenome,
        rng: &mut R,
    ) -> Vec<KnapsackGenome> {
        let width = self.width();
        if width < 2 || (parent1.bits | parent2.bits) == 0 {
            return vec![parent1.clone(), parent2.clone()];
        }

        let point = rng.random_range(1..width);
        let (child1, child2) = mask_crossover(parent1.bits, parent2.bits, point, width);
        [child1, child2]
            .into_iter()
            .filter(|&bits| self.fits(bits))
            .map(|bits| self.genome(bits))
            .collect()
    }

    /// Flips one random bit unless that would exceed the capacity.
    fn mutate<R: Rng>(&self, genome: &mut KnapsackGenome, rng: &mut R) {
        let point = rng.random_range(0..self.width());
        let flipped = genome.bits ^ (1u64 << point);
        if self.fits(flipped) {
            genome.bits = flipped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Individual;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", 5, 10),
            Item::new("b", 5, 10),
            Item::new("c", 8, 1),
        ]
    }

    fn problem() -> KnapsackProblem {
        KnapsackProblem::new(items(), 10).unwrap()
    }

    #[test]
    fn test_rejects_invalid_instances() {
        assert_eq!(
            KnapsackProblem::new(Vec::new(), 10).unwrap_err(),
            Error::EmptyCatalog
        );
        assert_eq!(
            KnapsackProblem::new(items(), 0).unwrap_err(),
            Error::ZeroCapacity
        );
        let many: Vec<Item> = (0..65).map(|i| Item::new(format!("i{i}"), 1, 1)).collect();
        assert_eq!(
            KnapsackProblem::new(many, 10).unwrap_err(),
            Error::CatalogTooLarge(65)
        );
    }

    #[test]
    fn test_accepts_full_width_catalog() {
        let items: Vec<Item> = (0..64).map(|i| Item::new(format!("i{i}"), 1, 1)).collect();
        let p = KnapsackProblem::new(items, 64).unwrap();
        let mut rng = create_rng(1);
        let g = p.create_individual(&mut rng);
        assert_eq!(g.bits(), u64::MAX);
    }

    #[test]
    fn test_evaluate_is_worth_when_feasible() {
        let p = problem();
        assert_eq!(p.evaluate(&p.genome(0b011)), Fitness(20));
        assert_eq!(p.evaluate(&p.genome(0b100)), Fitness(1));
        assert_eq!(p.evaluate(&p.genome(0)), Fitness(0));
    }

    #[test]
    fn test_evaluate_overweight_is_zero() {
        let p = problem();
        assert_eq!(p.evaluate(&p.genome(0b111)), Fitness(0));
        assert_eq!(p.evaluate(&p.genome(0b101)), Fitness(0));
    }

    #[test]
    fn test_genome_drops_bits_beyond_width() {
        let p = problem();
        assert_eq!(p.genome(0b1111_0001).bits(), 0b001);
    }

    #[test]
    fn test_initial_genomes_fit() {
        let p = problem();
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let g = p.create_individual(&mut rng);
            assert!(g.total_weight() <= 10);
            assert_ne!(g.bits(), 0, "repair should pack at least one item");
        }
    }

    #[test]
    fn test_repair_respects_attempt_cap() {
        let p = problem().with_max_repair_attempts(0);
        let mut rng = create_rng(42);
        assert_eq!(p.create_individual(&mut rng).bits(), 0);
    }

    #[test]
    fn test_crossover_children_fit() {
        let p = problem();
        let mut rng = create_rng(7);
        let (a, b) = (p.genome(0b001), p.genome(0b100));
        for _ in 0..200 {
            for child in p.crossover(&a, &b, &mut rng) {
                assert!(child.total_weight() <= 10);
            }
        }
    }

    #[test]
    fn test_one_empty_child_is_kept() {
        let p = KnapsackProblem::new(vec![Item::new("x", 1, 1), Item::new("y", 1, 1)], 2).unwrap();
        let a = p.genome(0b01);
        let b = p.genome(0b00);
        let mut rng = create_rng(7);
        // width 2 forces point 1: child1 = b.low | a.high = 0, child2 = a.low | b.high = 1
        let children = p.crossover(&b, &a, &mut rng);
        let bits: Vec<u64> = children.iter().map(|c| c.bits()).collect();
        assert_eq!(bits, vec![0b00, 0b01]);
    }

    #[test]
    fn test_empty_parents_are_returned_without_drawing() {
        let p = problem();
        let zero = p.genome(0);
        let mut rng = create_rng(7);
        let children = p.crossover(&zero, &zero, &mut rng);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.bits() == 0));
        // the generator is untouched
        let mut fresh = create_rng(7);
        assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn test_unpackable_catalog_runs_quietly() {
        let p = KnapsackProblem::new(vec![Item::new("anvil", 20, 5), Item::new("safe", 30, 9)], 10)
            .unwrap();
        let mut rng = create_rng(3);
        let a = p.create_individual(&mut rng);
        let b = p.create_individual(&mut rng);
        assert_eq!((a.bits(), b.bits()), (0, 0));
        let children = p.crossover(&a, &b, &mut rng);
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.bits() == 0));
    }

    proptest! {
        #[test]
        fn prop_children_hold_the_parents_bits(
            seed in any::<u64>(),
            a in 1u64..(1 << 12),
            b in 0u64..(1 << 12),
        ) {
            let items: Vec<Item> = (0..12).map(|i| Item::new(format!("i{i}"), 1, 1)).collect();
            let p = KnapsackProblem::new(items, 12).unwrap();
            let mut rng = create_rng(seed);
            let children = p.crossover(&p.genome(a), &p.genome(b), &mut rng);
            prop_assert_eq!(children.len(), 2);
            prop_assert_eq!(children[0].bits() | children[1].bits(), a | b);
        }
    }

    #[test]
    fn test_mutation_rejects_overweight_flip() {
        let p = problem();
        let mut rng = create_rng(3);
        for _ in 0..100 {
            let mut g = p.genome(0b011);
            p.mutate(&mut g, &mut rng);
            // flipping c in would weigh 18; only removals are accepted
            assert!(g.bits() == 0b011 || g.bits() == 0b010 || g.bits() == 0b001);
        }
    }

    #[test]
    fn test_random_catalog() {
        let mut rng = create_rng(11);
        let p = KnapsackProblem::random(32, &mut rng).unwrap();
        assert_eq!(p.catalog().len(), 32);
        assert!(p
            .catalog()
            .iter()
            .all(|i| (1..=50).contains(&i.weight) && i.worth <= 100));
        assert_eq!(p.capacity(), p.catalog_weight() / 3);
        assert!(p.catalog_worth() <= 3200);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = problem().default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.breeding, Breeding::Threshold);
        assert_eq!(config.population_size, 100);
    }

    proptest! {
        #[test]
        fn prop_operators_never_exceed_capacity(seed in any::<u64>(), capacity in 1u64..60) {
            let mut rng = create_rng(seed);
            let p = KnapsackProblem::random(12, &mut rng).unwrap();
            let p = KnapsackProblem::new(p.catalog().to_vec(), capacity).unwrap();
            let mut a = p.create_individual(&mut rng);
            let b = p.create_individual(&mut rng);
            prop_assert!(a.total_weight() <= capacity);
            for child in p.crossover(&a, &b, &mut rng) {
                prop_assert!(child.total_weight() <= capacity);
            }
            p.mutate(&mut a, &mut rng);
            prop_assert!(a.total_weight() <= capacity);
            let f = p.evaluate(&a);
            a.set_score(f);
            prop_assert_eq!(a.fitness(), a.total_worth());
        }
    }
}
