use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letters words are drawn from.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Inclusive range of word lengths picked by `WordGenerator::random_length`.
pub const WORD_LENGTH: RangeInclusive<usize> = 3..=10;

/// Builds a word of exactly `length` letters sampled uniformly, with
/// replacement, from `ALPHABET`.
///
/// A `length` of 0 yields an empty string.
pub fn generate_word<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
	(0..length)
		.map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
		.collect()
}

/// Random word source.
///
/// # Responsibilities
/// - Pick word lengths uniformly in `WORD_LENGTH`
/// - Produce words of a requested length
///
/// The generator is not cryptographically secure. Two generators built with
/// the same seed yield the same sequence of words.
#[derive(Debug, Clone)]
pub struct WordGenerator {
	rng: StdRng,
}

impl WordGenerator {
	/// Creates a generator seeded from OS entropy.
	pub fn new() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a deterministic generator.
	pub fn with_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Seeded when `seed` is set, from OS entropy otherwise.
	pub fn from_seed(seed: Option<u64>) -> Self {
		match seed {
			Some(seed) => Self::with_seed(seed),
			None => Self::new(),
		}
	}

	/// Returns a word length drawn uniformly from `WORD_LENGTH`.
	pub fn random_length(&mut self) -> usize {
		self.rng.random_range(WORD_LENGTH)
	}

	/// Returns a word of exactly `length` lowercase letters.
	pub fn generate_word(&mut self, length: usize) -> String {
		generate_word(&mut self.rng, length)
	}

	/// Returns a word of random length.
	pub fn next_word(&mut self) -> String {
		let length = self.random_length();
		self.generate_word(length)
	}
}

impl Default for WordGenerator {
	fn default() -> Self {
		Self::new()
	}
}
