/// How [`update_file`](crate::file::update_file) writes tags
///
/// # Examples
///
/// ```rust
/// use tracktag::config::WriteOptions;
///
/// // ID3v1 is written when the ID3v2 tag can't be
/// assert_eq!(WriteOptions::new(), WriteOptions::default());
///
/// // Rather fail than lose information
/// let strict = WriteOptions::new().id3v1_fallback(false);
/// assert_ne!(strict, WriteOptions::default());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) id3v1_fallback: bool,
}

impl WriteOptions {
	/// Same as [`WriteOptions::default`], usable in `const` contexts
	pub const fn new() -> Self {
		Self {
			id3v1_fallback: true,
		}
	}

	/// Write an ID3v1 tag if the ID3v2 tag can't be written, enabled by default
	///
	/// The ID3v1 tag only holds a single byte track number, and at most 30 Latin-1 characters
	/// per text field.
	pub fn id3v1_fallback(mut self, id3v1_fallback: bool) -> Self {
		self.id3v1_fallback = id3v1_fallback;
		self
	}
}

impl Default for WriteOptions {
	fn default() -> Self {
		Self::new()
	}
}
