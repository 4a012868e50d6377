use super::WriteOptions;

/// How a directory of chapters is organized
///
/// See [`organize_directory`](crate::organize::organize_directory).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct OrganizeOptions {
	pub(crate) pad_width: usize,
	pub(crate) write_options: WriteOptions,
}

impl OrganizeOptions {
	/// Default width of the zero-padded track number in file names
	pub const DEFAULT_PAD_WIDTH: usize = 3;

	/// Same as [`OrganizeOptions::default`], usable in `const` contexts
	pub const fn new() -> Self {
		Self {
			pad_width: Self::DEFAULT_PAD_WIDTH,
			write_options: WriteOptions::new(),
		}
	}

	/// The minimum number of digits in the renamed files' track numbers
	///
	/// Track numbers with more digits than this are written as-is.
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::config::OrganizeOptions;
	///
	/// // More than 999 chapters, "1.mp3" will become "0001 <book>.mp3"
	/// let options = OrganizeOptions::new().pad_width(4);
	/// ```
	pub fn pad_width(mut self, pad_width: usize) -> Self {
		self.pad_width = pad_width;
		self
	}

	/// The [`WriteOptions`] to use when updating each file's tags
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::config::{OrganizeOptions, WriteOptions};
	///
	/// let options =
	/// 	OrganizeOptions::new().write_options(WriteOptions::new().id3v1_fallback(false));
	/// ```
	pub fn write_options(mut self, write_options: WriteOptions) -> Self {
		self.write_options = write_options;
		self
	}
}

impl Default for OrganizeOptions {
	/// A pad width of [`OrganizeOptions::DEFAULT_PAD_WIDTH`], and the default [`WriteOptions`]
	fn default() -> Self {
		Self::new()
	}
}
