//! N-queens board genome.

use crate::ga::{Fitness, Individual};
use std::fmt;

/// Maximum number of non-attacking pairs on an `n`-queen board.
pub fn max_fitness(n: usize) -> u64 {
    (n * n.saturating_sub(1) / 2) as u64
}

/// Counts the queen pairs that do not attack each other.
///
/// Pair `(i, j)` counts when the queens share neither a row nor a diagonal.
pub fn non_attacking_pairs(rows: &[usize]) -> u64 {
    let mut count = 0;
    for i in 0..rows.len() {
        for j in i + 1..rows.len() {
            if rows[i].abs_diff(rows[j]) != j - i && rows[i] != rows[j] {
                count += 1;
            }
        }
    }
    count
}

/// One queen per column; `rows[i]` is the 1-based row of the queen in
/// column `i`.
///
/// Row collisions are allowed and only penalized through the fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) rows: Vec<usize>,
    pub(crate) fitness: Fitness,
}

impl Board {
    /// Wraps a row assignment into an unevaluated board.
    pub fn new(rows: Vec<usize>) -> Self {
        Self {
            rows,
            fitness: Fitness(0),
        }
    }

    /// Row of the queen in each column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of queens (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Fitness assigned at the last evaluation.
    pub fn fitness(&self) -> u64 {
        self.fitness.0
    }

    /// Returns `true` if no two queens share a row or a diagonal.
    pub fn is_solved(&self) -> bool {
        let rows = &self.rows;
        for i in 0..rows.len() {
            for j in i + 1..rows.len() {
                if rows[i] == rows[j] || rows[i].abs_diff(rows[j]) == j - i {
                    return false;
                }
            }
        }
        true
    }

    /// Renders the board as a grid, `Q` for a queen and `.` for an empty
    /// square, top row first.
    pub fn render(&self) -> String {
        let n = self.rows.len();
        let mut out = String::with_capacity(n * (2 * n + 1));
        for row in 1..=n {
            let line: Vec<&str> = self
                .rows
                .iter()
                .map(|&r| if r == row { "Q" } else { "." })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl Individual for Board {
    type Score = Fitness;

    fn score(&self) -> Fitness {
        self.fitness
    }

    fn set_score(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.rows.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", rows.join(" "))
    }
}
