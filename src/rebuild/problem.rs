//! String rebuilding problem definition.

use super::types::{positional_matches, Candidate};
use crate::error::Error;
use crate::ga::operators::splice;
use crate::ga::{Breeding, Fitness, GaConfig, GaProblem, Replacement, Selection};
use rand::Rng;

/// Characters initial candidates are drawn from.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Range of printable ASCII codes, used for replacement characters.
const PRINTABLE: std::ops::Range<u8> = 32..127;

fn is_printable(c: char) -> bool {
    c.is_ascii() && PRINTABLE.contains(&(c as u8))
}

/// Evolve strings towards a fixed printable-ASCII target.
#[derive(Debug, Clone)]
pub struct RebuildProblem {
    target: Vec<char>,
    alphabet: Vec<char>,
    mutation_rate: f64,
}

impl RebuildProblem {
    /// # Errors
    /// Fails if `target` is empty or holds a character outside printable
    /// ASCII.
    pub fn new(target: &str) -> Result<Self, Error> {
        if target.is_empty() {
            return Err(Error::EmptyTarget);
        }
        if let Some(c) = target.chars().find(|&c| !is_printable(c)) {
            return Err(Error::DisallowedCharacter(c));
        }
        Ok(Self {
            target: target.chars().collect(),
            alphabet: ALPHANUMERIC.chars().collect(),
            mutation_rate: 0.03,
        })
    }

    /// Replaces the alphabet initial candidates are drawn from.
    ///
    /// # Errors
    /// Fails on an empty alphabet or a non-printable character.
    pub fn with_alphabet(mut self, alphabet: &str) -> Result<Self, Error> {
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some(c) = alphabet.chars().find(|&c| !is_printable(c)) {
            return Err(Error::DisallowedCharacter(c));
        }
        self.alphabet = alphabet.chars().collect();
        Ok(self)
    }

    /// Sets the per-character mutation probability.
    ///
    /// # Errors
    /// Fails if `rate` is outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::RateOutOfRange {
                name: "character mutation_rate",
                value: rate,
            });
        }
        self.mutation_rate = rate;
        Ok(self)
    }

    /// The target string.
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Number of characters in the target.
    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// Per-character mutation probability.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Preset configuration: neighbours in rank order are paired and crossed
    /// both ways, every child goes through per-character mutation, and the
    /// run stops once the target is rebuilt (or after 10 000 generations).
    ///
    /// Offspring are merged with the current population. No operator
    /// lengthens a candidate, so full-length strings must outlive their
    /// shortened offspring.
    pub fn default_config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(100)
            .with_max_generations(10_000)
            .with_selection(Selection::Uniform)
            .with_breeding(Breeding::RankedPairs)
            .with_replacement(Replacement::Merge)
            .with_crossover_rate(1.0)
            .with_mutation_rate(1.0)
            .with_stop_when_solved(true)
    }

    fn random_printable<R: Rng>(rng: &mut R) -> char {
        char::from(rng.random_range(PRINTABLE))
    }
}

impl GaProblem for RebuildProblem {
    type Individual = Candidate;

    /// A random alphabet string of the target's length.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        let chars = (0..self.target.len())
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect();
        Candidate::new(chars)
    }

    fn evaluate(&self, candidate: &Candidate) -> Fitness {
        Fitness(positional_matches(&candidate.chars, &self.target))
    }

    /// Single child: `parent1[..p]` followed by `parent2[p..]`, where `p` is
    /// drawn from `[1, m)` over the shorter length `m` (0 when `m < 2`).
    fn crossover<R: Rng>(
        &self,
        parent1: &Candidate,
        parent2: &Candidate,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let m = parent1.len().min(parent2.len());
        let point = if m >= 2 { rng.random_range(1..m) } else { 0 };
        vec![Candidate::new(splice(&parent1.chars, &parent2.chars, point))]
    }

    /// Each character mutates with probability `mutation_rate`: replaced by
    /// a random printable character, or (only while longer than one
    /// character) replaced or deleted.
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) {
        let chars = &mut candidate.chars;
        let mut i = 0;
        while i < chars.len() {
            if rng.random_bool(self.mutation_rate) {
                match rng.random_range(0..3) {
                    0 => chars[i] = Self::random_printable(rng),
                    1 if chars.len() > 1 => chars[i] = Self::random_printable(rng),
                    2 if chars.len() > 1 => {
                        chars.remove(i);
                        continue;
                    }
                    _ => {}
                }
            }
            i += 1;
        }
    }

    /// Solved once every target position matches.
    fn is_solved(&self, candidate: &Candidate) -> bool {
        candidate.fitness() == self.target.len() as u64
    }
}
