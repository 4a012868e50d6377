//! Reading and writing tags on files
//!
//! Every operation here reads the entire file into memory, transforms it, and writes it back
//! atomically. See [`update_file`].

use crate::config::WriteOptions;
use crate::error::Result;
use crate::fields::{TagFieldSet, TagUpdate};
use crate::id3::v1::{Id3v1Tag, read_id3v1, update_id3v1};
use crate::id3::v2::{decode_known_fields, update_id3v2};
use crate::id3::{ID3FindResults, find_id3v2};
use crate::macros::err;
use crate::util::io::replace_contents;

use std::fmt::{Display, Formatter};
use std::path::Path;

/// The tag format written by [`update_file`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TagFormat {
	/// An ID3v2.3 tag at the start of the file
	Id3v2,
	/// An ID3v1 tag at the end of the file
	Id3v1,
}

impl Display for TagFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Id3v2 => f.write_str("ID3v2"),
			Self::Id3v1 => f.write_str("ID3v1"),
		}
	}
}

/// Whether `path` has an `.mp3` extension, ignoring case
pub(crate) fn is_mp3(path: &Path) -> bool {
	path.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
}

fn verify_path(path: &Path) -> Result<()> {
	if !path.exists() {
		err!(NotFound(path.to_path_buf()));
	}

	if !path.is_file() || !is_mp3(path) {
		err!(UnsupportedFile(path.to_path_buf()));
	}

	Ok(())
}

/// Read the known fields from an MP3 file
///
/// See [`read_fields_from`] for how the tags are chosen.
///
/// # Errors
///
/// * `path` doesn't exist
/// * `path` isn't an `.mp3` file
/// * [`std::io::Error`]
pub fn read_fields<P: AsRef<Path>>(path: P) -> Result<TagFieldSet> {
	let path = path.as_ref();
	verify_path(path)?;

	log::debug!("Reading tags from {}", path.display());
	let data = std::fs::read(path)?;
	Ok(read_fields_from(&data))
}

/// Read the known fields from the contents of an MP3 file
///
/// The ID3v2 tag is read first. Only if it's missing, or has none of the known fields, is the
/// ID3v1 tag read instead. The two are never merged.
///
/// # Examples
///
/// ```rust
/// use tracktag::file::read_fields_from;
/// use tracktag::id3::v1::{Id3v1Tag, update_id3v1};
///
/// let mut tag = Id3v1Tag::new();
/// tag.title = Some(String::from("Chapter One"));
///
/// let data = update_id3v1(&[0xFF, 0xFB, 0x90, 0x44], &tag);
/// let fields = read_fields_from(&data);
/// assert_eq!(fields.title.as_deref(), Some("Chapter One"));
/// ```
pub fn read_fields_from(data: &[u8]) -> TagFieldSet {
	let ID3FindResults(header, (block, _)) = find_id3v2(data);
	if header.is_some() {
		let fields = decode_known_fields(block);
		if !fields.is_empty() {
			return fields;
		}

		log::debug!("ID3v2 tag has none of the known fields, checking for ID3v1");
	}

	read_id3v1(data)
		.map(|tag| TagFieldSet::from(&tag))
		.unwrap_or_default()
}

/// Update the tags of an MP3 file
///
/// The ID3v2 tag is rewritten with the fields in `update`, creating the tag if needed. All other
/// frames are kept. If that fails and [`WriteOptions::id3v1_fallback`] is enabled, an ID3v1 tag
/// is written instead.
///
/// The file is never partially written: the new contents go to a temporary file in the same
/// directory, which then replaces the original.
///
/// # Errors
///
/// * `path` doesn't exist
/// * `path` isn't an `.mp3` file
/// * The tag couldn't be written (in both formats, with the fallback enabled)
///
/// # Examples
///
/// ```rust,no_run
/// use tracktag::config::WriteOptions;
/// use tracktag::fields::TagUpdate;
/// use tracktag::file::{TagFormat, update_file};
///
/// # fn main() -> tracktag::error::Result<()> {
/// let update = TagUpdate::new().track_number(5).album("Test Album");
/// let written = update_file("5.mp3", &update, WriteOptions::default())?;
/// assert_eq!(written, TagFormat::Id3v2);
/// # Ok(()) }
/// ```
pub fn update_file<P: AsRef<Path>>(
	path: P,
	update: &TagUpdate,
	write_options: WriteOptions,
) -> Result<TagFormat> {
	let path = path.as_ref();
	verify_path(path)?;

	let data = std::fs::read(path)?;

	let id3v2_err = match update_id3v2(&data, update).and_then(|new| replace_contents(path, &new)) {
		Ok(()) => {
			log::debug!("Updated ID3v2 tag in {}", path.display());
			return Ok(TagFormat::Id3v2);
		},
		Err(e) => e,
	};

	if !write_options.id3v1_fallback {
		return Err(id3v2_err);
	}

	log::warn!(
		"Failed to write an ID3v2 tag to {} ({id3v2_err}), falling back to ID3v1",
		path.display()
	);

	replace_contents(path, &update_id3v1(&data, &Id3v1Tag::from(update)))?;
	Ok(TagFormat::Id3v1)
}

/// Write an ID3v1 tag to an MP3 file
///
/// An existing ID3v1 tag is replaced, otherwise a new one is appended. The rest of the file is
/// left untouched.
///
/// # Errors
///
/// * `path` doesn't exist
/// * `path` isn't an `.mp3` file
/// * [`std::io::Error`]
pub fn write_id3v1<P: AsRef<Path>>(path: P, tag: &Id3v1Tag) -> Result<()> {
	let path = path.as_ref();
	verify_path(path)?;

	let data = std::fs::read(path)?;
	replace_contents(path, &update_id3v1(&data, tag))
}
