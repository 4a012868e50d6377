use super::file_name::parse_file_name;
use super::report::{BatchReport, FileOutcome, FileStatus};
use crate::config::{OrganizeOptions, WriteOptions};
use crate::error::Result;
use crate::fields::{TagFieldSet, TagUpdate};
use crate::file::{is_mp3, read_fields, update_file};
use crate::macros::err;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

struct Mp3File {
	path: PathBuf,
	file_name: String,
}

impl Mp3File {
	fn stem(&self) -> &str {
		self.path
			.file_stem()
			.and_then(OsStr::to_str)
			.unwrap_or_default()
	}
}

/// Every non-hidden `.mp3` file directly inside `dir`, sorted by name
fn mp3_files(dir: &Path) -> Result<Vec<Mp3File>> {
	if !dir.exists() {
		err!(NotFound(dir.to_path_buf()));
	}

	if !dir.is_dir() {
		err!(NotADirectory(dir.to_path_buf()));
	}

	let mut files = Vec::new();
	for entry in WalkDir::new(dir)
		.min_depth(1)
		.max_depth(1)
		.sort_by_file_name()
	{
		let entry = entry?;
		// Follows symlinks, broken links are skipped
		if !entry.path().is_file() || !is_mp3(entry.path()) {
			continue;
		}

		let Some(file_name) = entry.file_name().to_str() else {
			log::warn!(
				"Skipping {}, its name isn't valid UTF-8",
				entry.path().display()
			);
			continue;
		};

		if file_name.starts_with('.') {
			log::trace!("Skipping hidden file {file_name}");
			continue;
		}

		files.push(Mp3File {
			file_name: file_name.to_owned(),
			path: entry.into_path(),
		});
	}

	log::debug!("Found {} MP3 files in {}", files.len(), dir.display());
	Ok(files)
}

/// Update the track number of every numbered MP3 file in a directory
///
/// Each file's track number (and title, if there is one) is taken from its name, see
/// [`parse_file_name`]. Files without a number at the start of their name are skipped.
///
/// A file that fails to update doesn't stop the rest of the batch, its error is recorded in the
/// report instead.
///
/// # Errors
///
/// * `dir` doesn't exist, or isn't a directory
/// * `dir` couldn't be read
///
/// # Examples
///
/// ```rust,no_run
/// use tracktag::config::WriteOptions;
/// use tracktag::organize::update_directory;
///
/// # fn main() -> tracktag::error::Result<()> {
/// let report = update_directory("chapters/", WriteOptions::default())?;
/// for outcome in report.outcomes() {
/// 	println!("{outcome}");
/// }
///
/// println!("{report}");
/// # Ok(()) }
/// ```
pub fn update_directory<P: AsRef<Path>>(dir: P, write_options: WriteOptions) -> Result<BatchReport> {
	let mut report = BatchReport::default();

	for file in mp3_files(dir.as_ref())? {
		let Some(name) = parse_file_name(file.stem()) else {
			log::debug!("Skipping {}, no track number in its name", file.file_name);
			continue;
		};

		let mut update = TagUpdate::new().track_number(name.track_number);
		if let Some(title) = name.title {
			update = update.title(title);
		}

		let status = match update_file(&file.path, &update, write_options) {
			Ok(written) => FileStatus::Updated {
				track_number: name.track_number,
				written: Some(written),
			},
			Err(e) => {
				log::error!("Failed to update {}: {e}", file.file_name);
				FileStatus::Failed(e)
			},
		};

		report.outcomes.push(FileOutcome::new(file.file_name, status));
	}

	Ok(report)
}

/// Rename and re-tag every MP3 file in a directory as part of a single book
///
/// Each file's track number is taken from its name, or from its existing tags if the name doesn't
/// start with one. Files with neither are skipped. Files are processed in track order.
///
/// Every file is:
///
/// * Renamed to `<track> <book_id>.mp3`, with the track number zero-padded to
///   [`OrganizeOptions::pad_width`] digits. An existing file with that name is replaced.
/// * Tagged with its track number, and `book_id` as the album (unless `book_id` is empty).
///
/// Files that already have the right name and tags are left alone.
///
/// # Errors
///
/// * `dir` doesn't exist, or isn't a directory
/// * `dir` couldn't be read
///
/// # Examples
///
/// ```rust,no_run
/// use tracktag::config::OrganizeOptions;
/// use tracktag::organize::organize_directory;
///
/// # fn main() -> tracktag::error::Result<()> {
/// let report = organize_directory("chapters/", "MyBook", OrganizeOptions::new().pad_width(2))?;
/// println!(
/// 	"Renamed {} files, updated {} tags, {} errors",
/// 	report.renamed(),
/// 	report.tags_updated(),
/// 	report.errors()
/// );
/// # Ok(()) }
/// ```
pub fn organize_directory<P: AsRef<Path>>(
	dir: P,
	book_id: &str,
	options: OrganizeOptions,
) -> Result<BatchReport> {
	let dir = dir.as_ref();

	let mut tracks = Vec::new();
	for file in mp3_files(dir)? {
		// Unreadable tags are treated as missing, the update will report the real error
		let fields = read_fields(&file.path).unwrap_or_else(|e| {
			log::warn!("Unable to read tags from {}: {e}", file.file_name);
			TagFieldSet::default()
		});

		let track_number = match parse_file_name(file.stem()) {
			Some(name) => name.track_number,
			None => match fields.track_number {
				Some(track_number) => track_number,
				None => {
					log::debug!("Skipping {}, no track number found", file.file_name);
					continue;
				},
			},
		};

		tracks.push((file, track_number, fields));
	}

	tracks.sort_by_key(|(_, track_number, _)| *track_number);

	let mut report = BatchReport::default();
	for (file, track_number, fields) in tracks {
		let outcome = organize_file(dir, file, track_number, &fields, book_id, options);
		report.outcomes.push(outcome);
	}

	Ok(report)
}

fn organize_file(
	dir: &Path,
	file: Mp3File,
	track_number: u32,
	fields: &TagFieldSet,
	book_id: &str,
	options: OrganizeOptions,
) -> FileOutcome {
	let new_file_name = format!(
		"{track_number:0width$} {book_id}.mp3",
		width = options.pad_width
	);

	let needs_rename = file.file_name != new_file_name;
	let album_matches = book_id.is_empty() || fields.album.as_deref() == Some(book_id);
	let needs_tag_update = fields.track_number != Some(track_number) || !album_matches;

	if !needs_rename && !needs_tag_update {
		log::debug!("{} is already correct", file.file_name);
		return FileOutcome::new(file.file_name, FileStatus::AlreadyCorrect);
	}

	let mut outcome = FileOutcome::new(
		file.file_name,
		FileStatus::Updated {
			track_number,
			written: None,
		},
	);

	let mut path = file.path;
	if needs_rename {
		let new_path = dir.join(&new_file_name);
		if new_path.exists() {
			log::warn!("Replacing existing file {new_file_name}");
		}

		if let Err(e) = std::fs::rename(&path, &new_path) {
			log::error!("Failed to rename {} to {new_file_name}: {e}", outcome.file_name);
			outcome.status = FileStatus::Failed(e.into());
			return outcome;
		}

		log::info!("Renamed {} to {new_file_name}", outcome.file_name);
		outcome.renamed_to = Some(new_file_name);
		path = new_path;
	}

	if needs_tag_update {
		let update = TagUpdate::new().track_number(track_number).album(book_id);
		match update_file(&path, &update, options.write_options) {
			Ok(written) => {
				outcome.status = FileStatus::Updated {
					track_number,
					written: Some(written),
				};
			},
			Err(e) => {
				log::error!("Failed to update tags of {}: {e}", path.display());
				outcome.status = FileStatus::Failed(e);
			},
		}
	}

	outcome
}
