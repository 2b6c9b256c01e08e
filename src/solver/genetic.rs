//! Population-based stochastic strategy
//!
//! Evolves a small population seeded from the last real guess: probabilistic
//! single-point crossover, then three independent mutations (single-letter
//! replacement, two-letter swap, sub-sequence reversal), each child snapped
//! to the nearest dictionary word by Hamming distance. Children compatible
//! with the whole attempt history are collected; one of them, chosen
//! uniformly, becomes the next guess.
//!
//! The operators are pure: parents are never mutated. Fitness-proportionate
//! parent selection shifts weights to stay positive and falls back to a
//! uniform draw if the total ever degenerates to zero.

use super::error::SolveError;
use super::session::Session;
use super::strategy::Strategy;
use crate::core::{Word, incompatibilities};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};

/// Tuning knobs for the population search
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    /// Children bred per generation
    pub population_size: usize,
    /// Parents kept between generations
    pub parent_count: usize,
    /// Probability of single-point crossover per child
    pub crossover_prob: f64,
    /// Probability of the single-letter replacement mutation
    pub replace_prob: f64,
    /// Probability of the two-letter swap mutation
    pub swap_prob: f64,
    /// Probability of the sub-sequence reversal mutation
    pub reverse_prob: f64,
    /// Stop collecting once this many compatible children are found
    pub max_set_size: usize,
    /// Generations per collection round before restarting
    pub max_generations: usize,
    /// Overall wall-clock budget for one collection
    pub timeout: Duration,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            parent_count: 2,
            crossover_prob: 0.4,
            replace_prob: 0.4,
            swap_prob: 0.4,
            reverse_prob: 0.4,
            max_set_size: 10,
            max_generations: 100,
            timeout: Duration::from_secs(300),
        }
    }
}

/// Single-point crossover of two parents
///
/// With probability `prob`, returns `first[..point] + second[point..]` for a
/// random interior point; otherwise a copy of a randomly chosen parent.
/// Inputs are never mutated.
pub fn crossover<R: Rng + ?Sized>(rng: &mut R, prob: f64, first: &[u8], second: &[u8]) -> Vec<u8> {
    debug_assert_eq!(first.len(), second.len());

    if first.len() > 1 && rng.random_bool(prob) {
        let point = rng.random_range(1..first.len());
        let mut child = first[..point].to_vec();
        child.extend_from_slice(&second[point..]);
        child
    } else if rng.random_bool(0.5) {
        first.to_vec()
    } else {
        second.to_vec()
    }
}

/// Replace one random letter with a random alphabet letter
pub fn mutate_replacement<R: Rng + ?Sized>(rng: &mut R, prob: f64, letters: &[u8]) -> Vec<u8> {
    let mut child = letters.to_vec();
    if rng.random_bool(prob) {
        let position = rng.random_range(0..child.len());
        child[position] = rng.random_range(b'a'..=b'z');
    }
    child
}

/// Swap two random positions
pub fn mutate_swap<R: Rng + ?Sized>(rng: &mut R, prob: f64, letters: &[u8]) -> Vec<u8> {
    let mut child = letters.to_vec();
    if rng.random_bool(prob) {
        let a = rng.random_range(0..child.len());
        let b = rng.random_range(0..child.len());
        child.swap(a, b);
    }
    child
}

/// Reverse a random sub-sequence
pub fn mutate_reversal<R: Rng + ?Sized>(rng: &mut R, prob: f64, letters: &[u8]) -> Vec<u8> {
    let mut child = letters.to_vec();
    if rng.random_bool(prob) {
        let start = rng.random_range(0..child.len());
        let end = rng.random_range(start..child.len());
        child[start..=end].reverse();
    }
    child
}

/// Nearest dictionary word of equal length by Hamming distance
///
/// An exact match returns immediately; otherwise the minimum-distance word,
/// first seen winning ties.
#[must_use]
pub fn nearest_word<'a>(letters: &[u8], words: &'a [Word]) -> Option<&'a Word> {
    let mut best: Option<(&Word, usize)> = None;

    for word in words {
        if word.letters() == letters {
            return Some(word);
        }
        let distance = word
            .letters()
            .iter()
            .zip(letters)
            .filter(|(a, b)| a != b)
            .count();
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((word, distance)),
        }
    }

    best.map(|(word, _)| word)
}

/// Fitness-proportionate parent sampling
///
/// Fitness values are `-(incompatibilities) - 1`, always negative, so they
/// are shifted by `worst - 1` to strictly positive weights before roulette
/// sampling. A degenerate (zero) total falls back to a uniform draw.
fn select_parents<R: Rng + ?Sized>(
    rng: &mut R,
    population: &[Word],
    fitnesses: &[i64],
    count: usize,
) -> Vec<Vec<u8>> {
    debug_assert_eq!(population.len(), fitnesses.len());

    let worst = fitnesses.iter().min().copied().unwrap_or(0);
    let weights: Vec<i64> = fitnesses.iter().map(|f| f - worst + 1).collect();
    let total: i64 = weights.iter().sum();

    (0..count)
        .filter_map(|_| {
            if total <= 0 {
                return population.choose(rng).map(|w| w.letters().to_vec());
            }
            let mut ticket = rng.random_range(0..total);
            for (member, &weight) in population.iter().zip(&weights) {
                if ticket < weight {
                    return Some(member.letters().to_vec());
                }
                ticket -= weight;
            }
            None
        })
        .collect()
}

/// Population-based stochastic strategy
pub struct GeneticStrategy {
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticStrategy {
    /// Build with the given configuration and an optional fixed seed
    ///
    /// A seed makes the whole strategy reproducible; without one the
    /// generator is seeded from system entropy.
    #[must_use]
    pub fn new(config: GeneticConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    /// Collect dictionary words compatible with the whole attempt history
    ///
    /// Restarts the generation counter whenever a full round produces
    /// nothing, until the wall-clock budget runs out; an empty result at
    /// the deadline is surfaced as [`SolveError::StochasticTimeout`].
    fn collect_candidates(
        &mut self,
        seed_guess: &Word,
        session: &Session,
    ) -> Result<Vec<Word>, SolveError> {
        let length = session.word_length();
        let words = session
            .dictionary()
            .words_of_length(length)
            .ok_or(SolveError::MissingLength(length))?;

        let mut parents: Vec<Vec<u8>> =
            vec![seed_guess.letters().to_vec(); self.config.parent_count.max(1)];
        let mut found: Vec<Word> = Vec::new();
        let start = Instant::now();

        while start.elapsed() < self.config.timeout && found.is_empty() {
            let mut generation = 0;

            while found.len() < self.config.max_set_size
                && generation < self.config.max_generations
                && start.elapsed() < self.config.timeout
            {
                let mut population = Vec::with_capacity(self.config.population_size);
                let mut fitnesses = Vec::with_capacity(self.config.population_size);

                for _ in 0..self.config.population_size {
                    let first = parents
                        .choose(&mut self.rng)
                        .cloned()
                        .unwrap_or_else(|| seed_guess.letters().to_vec());
                    let second = parents
                        .choose(&mut self.rng)
                        .cloned()
                        .unwrap_or_else(|| seed_guess.letters().to_vec());

                    let child = crossover(&mut self.rng, self.config.crossover_prob, &first, &second);
                    let child = mutate_replacement(&mut self.rng, self.config.replace_prob, &child);
                    let child = mutate_swap(&mut self.rng, self.config.swap_prob, &child);
                    let child = mutate_reversal(&mut self.rng, self.config.reverse_prob, &child);

                    let Some(snapped) = nearest_word(&child, words) else {
                        continue;
                    };

                    let fitness = -(incompatibilities(snapped, session.attempts()) as i64) - 1;
                    if fitness == -1 {
                        found.push(snapped.clone());
                    }
                    population.push(snapped.clone());
                    fitnesses.push(fitness);
                }

                parents = select_parents(
                    &mut self.rng,
                    &population,
                    &fitnesses,
                    self.config.parent_count,
                );
                if parents.is_empty() {
                    parents = vec![seed_guess.letters().to_vec()];
                }
                generation += 1;
            }
        }

        if found.is_empty() {
            return Err(SolveError::StochasticTimeout(self.config.timeout));
        }
        Ok(found)
    }
}

impl Strategy for GeneticStrategy {
    fn solve(&mut self, session: &mut Session) -> Result<usize, SolveError> {
        let length = session.word_length();
        let mut guess = session
            .dictionary()
            .random_word(length, &mut self.rng)
            .ok_or(SolveError::MissingLength(length))?
            .clone();

        loop {
            let (solved, _) = session.attempt(&guess);
            if solved {
                return Ok(session.attempt_count());
            }

            let candidates = self.collect_candidates(&guess, session)?;
            guess = candidates
                .choose(&mut self.rng)
                .ok_or(SolveError::SearchExhausted)?
                .clone();
        }
    }
}
