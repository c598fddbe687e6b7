//! Error types for word file generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for generation runs.
///
/// Every variant is an I/O failure; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
	/// Failed to create or truncate the output file
	#[error("{}: {source}", path.display())]
	CreateOutput {
		/// Path to the output file
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: io::Error,
	},

	/// Failed to write or flush words to the output file
	#[error("{}: write failed: {source}", path.display())]
	Write {
		/// Path to the output file
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: io::Error,
	},

	/// General I/O error
	#[error("I/O error: {source}")]
	Io {
		/// Underlying I/O error
		#[source]
		source: io::Error,
	},
}

/// Specialized `Result` type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
	fn from(source: io::Error) -> Self {
		Error::Io { source }
	}
}

impl Error {
	/// Attaches the output path to a bare I/O error raised while writing.
	pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
		match self {
			Error::Io { source } => Error::Write { path: path.to_owned(), source },
			other => other,
		}
	}

	/// Kind of the underlying I/O error.
	pub fn kind(&self) -> io::ErrorKind {
		match self {
			Error::CreateOutput { source, .. }
			| Error::Write { source, .. }
			| Error::Io { source } => source.kind(),
		}
	}
}
