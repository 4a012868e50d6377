use crate::error::TrackTagError;
use crate::file::TagFormat;

use std::fmt::{Display, Formatter};

/// What happened to a single file in a batch
#[derive(Debug)]
#[non_exhaustive]
pub enum FileStatus {
	/// The file was renamed and/or had its tags updated
	Updated {
		/// The track number the file now has
		track_number: u32,
		/// The tag format that was written, if the tags needed an update
		written: Option<TagFormat>,
	},
	/// Nothing needed to change
	AlreadyCorrect,
	/// The file couldn't be processed
	Failed(TrackTagError),
}

/// The outcome of processing a single file
#[derive(Debug)]
pub struct FileOutcome {
	pub(crate) file_name: String,
	pub(crate) renamed_to: Option<String>,
	pub(crate) status: FileStatus,
}

impl FileOutcome {
	pub(crate) fn new(file_name: String, status: FileStatus) -> Self {
		Self {
			file_name,
			renamed_to: None,
			status,
		}
	}

	/// The file's original name
	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	/// The file's new name, if it was renamed
	///
	/// A file can be renamed and still fail, if its tags couldn't be updated afterwards.
	pub fn renamed_to(&self) -> Option<&str> {
		self.renamed_to.as_deref()
	}

	/// What happened to the file
	pub fn status(&self) -> &FileStatus {
		&self.status
	}

	/// Whether the file was processed without errors
	pub fn is_success(&self) -> bool {
		!matches!(self.status, FileStatus::Failed(_))
	}
}

impl Display for FileOutcome {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.status {
			FileStatus::Updated { track_number, .. } => {
				write!(f, "✓ {} → Track #{track_number}", self.file_name)
			},
			FileStatus::AlreadyCorrect => write!(f, "✓ Already correct: {}", self.file_name),
			FileStatus::Failed(ref err) => write!(f, "✗ {}: {err}", self.file_name),
		}
	}
}

/// The outcome of processing a directory
///
/// Displays as a one line summary, each [`FileOutcome`] has its own status line.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub(crate) outcomes: Vec<FileOutcome>,
}

impl BatchReport {
	/// Every file that was processed, in processing order
	pub fn outcomes(&self) -> &[FileOutcome] {
		&self.outcomes
	}

	/// The number of files processed
	pub fn processed(&self) -> usize {
		self.outcomes.len()
	}

	/// The number of files processed without errors
	pub fn successful(&self) -> usize {
		self.outcomes.iter().filter(|o| o.is_success()).count()
	}

	/// The number of files that were renamed
	pub fn renamed(&self) -> usize {
		self.outcomes
			.iter()
			.filter(|o| o.renamed_to.is_some())
			.count()
	}

	/// The number of files that had their tags updated
	pub fn tags_updated(&self) -> usize {
		self.outcomes
			.iter()
			.filter(|o| {
				matches!(
					o.status,
					FileStatus::Updated {
						written: Some(_),
						..
					}
				)
			})
			.count()
	}

	/// The number of files that failed
	pub fn errors(&self) -> usize {
		self.processed() - self.successful()
	}

	/// Whether every file was processed without errors
	pub fn is_success(&self) -> bool {
		self.errors() == 0
	}
}

impl Display for BatchReport {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Processed {} files, {} successful",
			self.processed(),
			self.successful()
		)
	}
}
