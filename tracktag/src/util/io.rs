//! Whole-file reads and atomic replacement

use crate::error::Result;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace the contents of `path` with `contents`
///
/// The new contents are written to a temporary file in the same directory, which is then renamed
/// over `path`. Readers see either the old file or the new file, never a partial write.
pub(crate) fn replace_contents(path: &Path, contents: &[u8]) -> Result<()> {
	let parent = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut temp = NamedTempFile::new_in(parent)?;
	log::trace!(
		"Writing {} bytes to temporary file {}",
		contents.len(),
		temp.path().display()
	);

	temp.write_all(contents)?;
	temp.as_file().sync_all()?;

	// Keep the original permissions, the temporary file is created with 0600
	if let Ok(metadata) = std::fs::metadata(path) {
		temp.as_file().set_permissions(metadata.permissions())?;
	}

	temp.persist(path)?;
	Ok(())
}
