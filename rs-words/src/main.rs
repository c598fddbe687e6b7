//! Random word file generator
//!
//! Writes newline-terminated random lowercase words to a file until it
//! reaches a target size.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use rs_words_core::generate_file;

mod opts;

use opts::Opts;

fn main() -> ExitCode {
	let opts = Opts::parse();

	env_logger::Builder::new()
		.filter_level(opts.log_level())
		.init();

	let config = opts.config();
	debug!("starting with {config:?}");

	let report = match generate_file(&config) {
		Ok(report) => report,
		Err(e) => {
			eprintln!("rs-words: {e}");
			return ExitCode::FAILURE;
		}
	};

	info!(
		"{}: {} words, {} bytes",
		config.output.display(),
		report.words,
		report.bytes
	);

	ExitCode::SUCCESS
}
