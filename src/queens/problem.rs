//! N-queens problem definition.

use super::types::{non_attacking_pairs, Board};
use crate::error::Error;
use crate::ga::operators::splice;
use crate::ga::{Breeding, Fitness, GaConfig, GaProblem, Replacement, Selection};
use rand::seq::SliceRandom;
use rand::Rng;

/// Place `n` queens on an `n × n` board so that none attack each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueensProblem {
    n: usize,
}

impl QueensProblem {
    /// Smallest board with a solution worth searching for.
    pub const MIN_QUEENS: usize = 4;

    /// # Errors
    /// Fails if `n` is below [`Self::MIN_QUEENS`].
    pub fn new(n: usize) -> Result<Self, Error> {
        if n < Self::MIN_QUEENS {
            return Err(Error::TooFewQueens(n));
        }
        Ok(Self { n })
    }

    /// Number of queens.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Preset configuration: roulette parents, one child per pair,
    /// generational replacement, stop on the first solved board.
    ///
    /// Population 500, mutation 0.10, capped at 10 000 generations. Finding
    /// a solution is probabilistic; the cap only bounds the run.
    pub fn default_config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(500)
            .with_max_generations(10_000)
            .with_selection(Selection::Roulette)
            .with_breeding(Breeding::Paired)
            .with_replacement(Replacement::Generational)
            .with_crossover_rate(1.0)
            .with_mutation_rate(0.1)
            .with_stop_when_solved(true)
    }
}

impl GaProblem for QueensProblem {
    type Individual = Board;

    /// A random permutation of rows: no row collisions to start with.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Board {
        let mut rows: Vec<usize> = (1..=self.n).collect();
        rows.shuffle(rng);
        Board::new(rows)
    }

    fn evaluate(&self, board: &Board) -> Fitness {
        Fitness(non_attacking_pairs(&board.rows))
    }

    /// Single child: genes `[0, p)` from `parent_x`, the rest from
    /// `parent_y`, for a cut point `p` in `[1, n - 1)`.
    fn crossover<R: Rng>(&self, parent_x: &Board, parent_y: &Board, rng: &mut R) -> Vec<Board> {
        let point = rng.random_range(1..self.n - 1);
        vec![Board::new(splice(&parent_x.rows, &parent_y.rows, point))]
    }

    /// Moves the queen of one random column to a random row.
    fn mutate<R: Rng>(&self, board: &mut Board, rng: &mut R) {
        let column = rng.random_range(0..self.n);
        board.rows[column] = rng.random_range(1..=self.n);
    }

    fn is_solved(&self, board: &Board) -> bool {
        board.is_solved()
    }
}
