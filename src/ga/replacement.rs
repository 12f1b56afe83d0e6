//! Replacement policies: how the evaluated offspring pool and the current
//! population form the next generation.
//!
//! Every policy returns exactly `size` individuals as long as the current
//! population holds `size` individuals. A short pool is topped up from the
//! current population; no individual is carried over by identity otherwise.

use super::types::{Individual, Score};

/// Policy for assembling the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// Truncate the pool in encounter order. A short pool is topped up with
    /// the current population in encounter order.
    Generational,

    /// Sort the pool best first, then truncate. A short pool is topped up
    /// with the best of the current population.
    #[default]
    Elitist,

    /// Merge the current population with the pool, sort best first and keep
    /// the leading `size` individuals (μ + λ).
    Merge,
}

impl Replacement {
    /// Builds the next generation. `pool` must already be evaluated.
    pub fn replace<I: Individual>(&self, population: Vec<I>, pool: Vec<I>, size: usize) -> Vec<I> {
        let mut next = match self {
            Replacement::Generational => {
                let mut next = pool;
                next.truncate(size);
                let missing = size.saturating_sub(next.len());
                next.extend(population.into_iter().take(missing));
                next
            }
            Replacement::Elitist => {
                let mut next = pool;
                sort_best_first(&mut next);
                next.truncate(size);
                let missing = size.saturating_sub(next.len());
                if missing > 0 {
                    let mut current = population;
                    sort_best_first(&mut current);
                    next.extend(current.into_iter().take(missing));
                }
                next
            }
            Replacement::Merge => {
                let mut next = population;
                next.extend(pool);
                sort_best_first(&mut next);
                next
            }
        };
        next.truncate(size);
        next
    }
}

/// Stable sort, best first according to the score polarity.
pub(crate) fn sort_best_first<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| a.score().rank_cmp(&b.score()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::{Cost, Fitness};

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged<S> {
        tag: &'static str,
        score: S,
    }

    impl Individual for Tagged<Fitness> {
        type Score = Fitness;
        fn score(&self) -> Fitness {
            self.score
        }
        fn set_score(&mut self, s: Fitness) {
            self.score = s;
        }
    }

    impl Individual for Tagged<Cost> {
        type Score = Cost;
        fn score(&self) -> Cost {
            self.score
        }
        fn set_score(&mut self, s: Cost) {
            self.score = s;
        }
    }

    fn fit(tag: &'static str, f: u64) -> Tagged<Fitness> {
        Tagged {
            tag,
            score: Fitness(f),
        }
    }

    fn cost(tag: &'static str, c: f64) -> Tagged<Cost> {
        Tagged {
            tag,
            score: Cost(c),
        }
    }

    fn tags<S>(v: &[Tagged<S>]) -> Vec<&'static str> {
        v.iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_generational_truncates_in_encounter_order() {
        let population = vec![fit("p0", 1), fit("p1", 1)];
        let pool = vec![fit("a", 1), fit("b", 9), fit("c", 5)];
        let next = Replacement::Generational.replace(population, pool, 2);
        assert_eq!(tags(&next), vec!["a", "b"]);
    }

    #[test]
    fn test_generational_tops_up_short_pool() {
        let population = vec![fit("p0", 1), fit("p1", 2), fit("p2", 3)];
        let pool = vec![fit("a", 7)];
        let next = Replacement::Generational.replace(population, pool, 3);
        assert_eq!(tags(&next), vec!["a", "p0", "p1"]);
    }

    #[test]
    fn test_elitist_keeps_best_of_pool() {
        let population = vec![fit("p0", 100), fit("p1", 100)];
        let pool = vec![fit("a", 1), fit("b", 9), fit("c", 5)];
        let next = Replacement::Elitist.replace(population, pool, 2);
        assert_eq!(tags(&next), vec!["b", "c"]);
    }

    #[test]
    fn test_elitist_tops_up_with_best_current() {
        let population = vec![fit("p0", 1), fit("p1", 8), fit("p2", 3)];
        let next = Replacement::Elitist.replace(population, Vec::new(), 3);
        assert_eq!(tags(&next), vec!["p1", "p2", "p0"]);
    }

    #[test]
    fn test_merge_keeps_lowest_costs() {
        let population = vec![cost("p0", 5.0), cost("p1", 2.0), cost("p2", 9.0)];
        let pool = vec![cost("a", 1.0), cost("b", 7.0)];
        let next = Replacement::Merge.replace(population, pool, 3);
        assert_eq!(tags(&next), vec!["a", "p1", "p0"]);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let population = vec![cost("p0", 3.0), cost("p1", 3.0)];
        let pool = vec![cost("a", 3.0), cost("b", 3.0)];
        let next = Replacement::Merge.replace(population, pool, 2);
        assert_eq!(tags(&next), vec!["p0", "p1"]);
    }

    #[test]
    fn test_size_invariant_for_every_policy() {
        for policy in [
            Replacement::Generational,
            Replacement::Elitist,
            Replacement::Merge,
        ] {
            for pool_len in [0usize, 1, 4, 5, 11] {
                let population: Vec<_> = (0..5).map(|i| fit("p", i)).collect();
                let pool: Vec<_> = (0..pool_len as u64).map(|i| fit("c", i * 3)).collect();
                let next = policy.replace(population, pool, 5);
                assert_eq!(next.len(), 5, "{policy:?} with pool of {pool_len}");
            }
        }
    }
}
