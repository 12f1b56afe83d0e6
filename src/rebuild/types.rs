//! Character-sequence genome.

use crate::ga::{Fitness, Individual};
use std::fmt;

/// Counts positions where `candidate` and `target` hold the same
/// character, pairing them up to the shorter length.
pub fn positional_matches(candidate: &[char], target: &[char]) -> u64 {
    candidate
        .iter()
        .zip(target)
        .filter(|(a, b)| a == b)
        .count() as u64
}

/// A candidate string. Its length may drift below the target's after
/// deletion mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub(crate) chars: Vec<char>,
    pub(crate) fitness: Fitness,
}

impl Candidate {
    /// Wraps a character sequence into an unevaluated candidate.
    pub fn new(chars: Vec<char>) -> Self {
        Self {
            chars,
            fitness: Fitness(0),
        }
    }

    /// The characters of the candidate.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters, possibly below the target length.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the candidate holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Fitness assigned at the last evaluation.
    pub fn fitness(&self) -> u64 {
        self.fitness.0
    }

    /// Collects the characters into a `String`.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

impl Individual for Candidate {
    type Score = Fitness;

    fn score(&self) -> Fitness {
        self.fitness
    }

    fn set_score(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
