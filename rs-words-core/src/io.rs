use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};

/// Opens `path` for writing through a buffered writer.
///
/// - Creates the file if it does not exist
/// - Truncates it otherwise
pub fn create_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
	let path = path.as_ref();
	let file = File::create(path).map_err(|source| Error::CreateOutput {
		path: path.to_owned(),
		source,
	})?;
	log::trace!("opened {} for writing", path.display());
	Ok(BufWriter::new(file))
}
