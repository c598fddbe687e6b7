//! Command line argument parsing for rs-words

use std::path::PathBuf;

use clap::Parser;

use rs_words_core::GeneratorConfig;
use rs_words_core::config::{DEFAULT_OUTPUT, DEFAULT_TARGET_SIZE};

/// Fill a text file with random lowercase words
///
/// Words are 3 to 10 letters long, one per line. Generation stops as soon as
/// the file holds at least the requested number of bytes.
#[derive(Parser, Debug)]
#[command(name = "rs-words", version, about = "Fill a text file with random lowercase words")]
pub struct Opts {
	/// File to create or overwrite
	#[arg(short = 'o', long = "out", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
	pub out: PathBuf,

	/// Minimum size of the output file in bytes
	#[arg(short = 's', long = "size", value_name = "BYTES", default_value_t = DEFAULT_TARGET_SIZE)]
	pub size: u64,

	/// Seed for reproducible output
	#[arg(long = "seed", value_name = "N")]
	pub seed: Option<u64>,

	/// Verbose mode
	#[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
	pub verbose: bool,

	/// Suppress the run summary; failures are still printed
	#[arg(short = 'q', long = "quiet")]
	pub quiet: bool,
}

impl Opts {
	/// Builds the run configuration from the parsed flags.
	pub fn config(&self) -> GeneratorConfig {
		GeneratorConfig {
			output: self.out.clone(),
			target_size: self.size,
			seed: self.seed,
		}
	}

	/// Log level selected by `--verbose` / `--quiet`.
	pub fn log_level(&self) -> log::LevelFilter {
		if self.verbose {
			log::LevelFilter::Debug
		} else if self.quiet {
			log::LevelFilter::Error
		} else {
			log::LevelFilter::Info
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let opts = Opts::try_parse_from(["rs-words"]).unwrap();
		assert_eq!(opts.config(), GeneratorConfig::default());
		assert_eq!(opts.log_level(), log::LevelFilter::Info);
	}

	#[test]
	fn flags() {
		let opts = Opts::try_parse_from(["rs-words", "--out", "out.txt", "--size", "50", "--seed", "3", "-v"])
			.unwrap();
		assert_eq!(opts.config(), GeneratorConfig::new("out.txt", 50).with_seed(3));
		assert_eq!(opts.log_level(), log::LevelFilter::Debug);
	}

	#[test]
	fn quiet_lowers_level_to_error() {
		let opts = Opts::try_parse_from(["rs-words", "-q"]).unwrap();
		assert_eq!(opts.log_level(), log::LevelFilter::Error);
	}

	#[test]
	fn negative_size_is_rejected() {
		assert!(Opts::try_parse_from(["rs-words", "--size", "-5"]).is_err());
	}

	#[test]
	fn verbose_conflicts_with_quiet() {
		assert!(Opts::try_parse_from(["rs-words", "-v", "-q"]).is_err());
	}
}
