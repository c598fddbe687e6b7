use std::io::Write;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::io;
use crate::model::word::WordGenerator;

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
	/// Number of words (lines) written
	pub words: u64,
	/// Number of bytes written, newlines included
	pub bytes: u64,
}

/// Writes newline-terminated words to `sink` until at least `target_size`
/// bytes have been written.
///
/// # Behavior
/// - Each iteration picks a random length, generates a word, writes it
///   followed by `\n`, then compares the running byte count to the target.
/// - The check happens after each write, so the output may exceed the
///   target by up to 10 letters plus the newline.
/// - A target of 0 is already met: nothing is written.
///
/// # Errors
/// Any write error is returned as is; nothing is retried.
pub fn write_words<W: Write>(
	sink: &mut W,
	words: &mut WordGenerator,
	target_size: u64,
) -> Result<Report> {
	let mut report = Report::default();
	if target_size == 0 {
		return Ok(report);
	}

	let mut line = String::with_capacity(16);
	loop {
		line.clear();
		line.push_str(&words.next_word());
		line.push('\n');
		sink.write_all(line.as_bytes())?;

		report.words += 1;
		report.bytes += line.len() as u64;
		if report.bytes >= target_size {
			break;
		}
	}

	Ok(report)
}

/// Creates (or truncates) `config.output` and fills it with random words
/// until it holds at least `config.target_size` bytes.
///
/// The file handle lives for the duration of this call only and is released
/// on every exit path. The buffered writer is flushed explicitly so a failed
/// flush is reported instead of being lost on drop.
///
/// # Errors
/// - `Error::CreateOutput` if the file cannot be created
/// - `Error::Write` if writing or flushing fails
pub fn generate_file(config: &GeneratorConfig) -> Result<Report> {
	let path = config.output.as_path();
	let mut words = WordGenerator::from_seed(config.seed);
	let mut out = io::create_output(path)?;

	let report = write_words(&mut out, &mut words, config.target_size)
		.map_err(|e| e.with_path(path))?;
	out.flush().map_err(|source| crate::Error::Write {
		path: path.to_owned(),
		source,
	})?;

	log::debug!(
		"wrote {} words ({} bytes, target {}) to {}",
		report.words,
		report.bytes,
		config.target_size,
		path.display()
	);
	Ok(report)
}
