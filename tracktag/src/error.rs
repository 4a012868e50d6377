//! Contains the errors that can arise within tracktag
//!
//! The primary error is [`TrackTagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Malformed tags are *not* errors. The tag parsers recover from bad frames and sizes by
//! keeping whatever was read successfully, see [`parse_frames`](crate::id3::v2::parse_frames).

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

/// Alias for `Result<T, TrackTagError>`
pub type Result<T> = std::result::Result<T, TrackTagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Path related errors
	/// The target path does not exist
	NotFound(PathBuf),
	/// The target path exists, but isn't an MP3 file
	UnsupportedFile(PathBuf),
	/// The target path exists, but isn't a directory
	NotADirectory(PathBuf),

	// Tag related errors
	/// Arises when a tag is expected (Ex. parsing an ID3v1 trailer), but the marker isn't found
	FakeTag,
	/// Attempting to write more data than a tag or frame can describe
	///
	/// ID3v2 tag sizes are limited to 28 bits, and frame sizes to 32 bits.
	TooMuchData,

	// Conversions for external errors
	/// Errors that arise while walking a directory
	Walk(walkdir::Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within tracktag
pub struct TrackTagError {
	pub(crate) kind: ErrorKind,
}

impl TrackTagError {
	/// Create a `TrackTagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::error::{ErrorKind, TrackTagError};
	///
	/// let fake_tag = TrackTagError::new(ErrorKind::FakeTag);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::error::{ErrorKind, TrackTagError};
	///
	/// let fake_tag = TrackTagError::new(ErrorKind::FakeTag);
	/// if let ErrorKind::FakeTag = fake_tag.kind() {
	/// 	println!("Where's the tag?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TrackTagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Walk(ref err) => Some(err),
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for TrackTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for TrackTagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<tempfile::PersistError> for TrackTagError {
	fn from(input: tempfile::PersistError) -> Self {
		Self {
			kind: ErrorKind::Io(input.error),
		}
	}
}

impl From<walkdir::Error> for TrackTagError {
	fn from(input: walkdir::Error) -> Self {
		Self {
			kind: ErrorKind::Walk(input),
		}
	}
}

impl Display for TrackTagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Walk(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::NotFound(ref path) => write!(f, "File not found: {}", path.display()),
			ErrorKind::UnsupportedFile(ref path) => {
				write!(f, "Not an MP3 file: {}", path.display())
			},
			ErrorKind::NotADirectory(ref path) => {
				write!(f, "Directory not found: {}", path.display())
			},
			ErrorKind::FakeTag => write!(f, "Reading: Expected a tag, found invalid data"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to write more data than the tag format can describe"
			),
		}
	}
}
