//! Configuration types and defaults for generation runs.

use std::path::PathBuf;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "random.txt";

/// Default target size in bytes
pub const DEFAULT_TARGET_SIZE: u64 = 2000;

/// Parameters of a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// File to create or truncate
	pub output: PathBuf,
	/// Minimum number of bytes the file must reach
	pub target_size: u64,
	/// Seed for the word generator, `None` draws from OS entropy
	pub seed: Option<u64>,
}

impl GeneratorConfig {
	/// Creates a configuration without a seed.
	pub fn new<P: Into<PathBuf>>(output: P, target_size: u64) -> Self {
		Self {
			output: output.into(),
			target_size,
			seed: None,
		}
	}

	/// Sets a deterministic seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self::new(DEFAULT_OUTPUT, DEFAULT_TARGET_SIZE)
	}
}
