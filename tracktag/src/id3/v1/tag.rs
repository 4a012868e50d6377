use super::constants::GENRES;
use crate::fields::TagUpdate;

/// An ID3v1 tag
///
/// ID3v1 is a severely limited format, with each field being incredibly small in size. All
/// fields have been commented with their maximum sizes and any other additional restrictions.
///
/// Attempting to write a field greater than the maximum size will **not** error, it will just be
/// shrunk.
///
/// ## Conversions
///
/// An `Id3v1Tag` can be created from a [`TagUpdate`], which is how the ID3v1 fallback of
/// [`update_file`](crate::update_file) builds its trailer.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: Option<String>,
	/// Track artist, 30 bytes max
	pub artist: Option<String>,
	/// Album title, 30 bytes max
	pub album: Option<String>,
	/// Release year, 4 bytes max
	///
	/// Longer years are cut down to their first 4 digits when written.
	pub year: Option<u16>,
	/// A short comment
	///
	/// 28 bytes max with a track number, 30 bytes otherwise.
	pub comment: Option<String>,
	/// The track number, 1 byte max
	///
	/// Issues:
	///
	/// * The track number **cannot** be 0. Many readers, including this one, consider this the
	///   absence of a track number.
	/// * This is *not* the same as the track number in ID3v2, it's limited to 255.
	pub track_number: Option<u8>,
	/// The track's genre, 1 byte max
	///
	/// ID3v1 has a predefined set of genres, see [`GENRES`]. This byte should be an index to a
	/// genre.
	pub genre: Option<u8>,
}

impl Id3v1Tag {
	/// Create a new empty `Id3v1Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v1::Id3v1Tag;
	///
	/// let id3v1_tag = Id3v1Tag::new();
	/// assert!(id3v1_tag.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the track number
	///
	/// Only the low 8 bits are kept, so a track number above 255 wraps around.
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v1::Id3v1Tag;
	///
	/// let mut tag = Id3v1Tag::new();
	/// tag.set_track(300);
	/// assert_eq!(tag.track_number, Some(44));
	/// ```
	pub fn set_track(&mut self, track: u32) {
		let stored = (track & 0xFF) as u8;
		if u32::from(stored) != track {
			log::warn!("Track number {track} doesn't fit in ID3v1, it will be stored as {stored}");
		}

		self.track_number = Some(stored);
	}

	/// The name of the genre, if it's in [`GENRES`]
	pub fn genre(&self) -> Option<&'static str> {
		self.genre
			.and_then(|genre| GENRES.get(usize::from(genre)))
			.copied()
	}

	/// Set the genre by name
	///
	/// The name is matched against [`GENRES`], ignoring case. Unknown genres remove the genre.
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v1::Id3v1Tag;
	///
	/// let mut tag = Id3v1Tag::new();
	/// tag.set_genre("classic rock");
	/// assert_eq!(tag.genre, Some(1));
	/// assert_eq!(tag.genre(), Some("Classic Rock"));
	///
	/// tag.set_genre("Audiobook");
	/// assert_eq!(tag.genre, None);
	/// ```
	pub fn set_genre(&mut self, genre: &str) {
		self.genre = GENRES
			.iter()
			.position(|known| known.eq_ignore_ascii_case(genre))
			.and_then(|index| u8::try_from(index).ok());

		if self.genre.is_none() {
			log::warn!("`{genre}` isn't an ID3v1 genre, it will be written as unknown");
		}
	}

	/// Whether every field is empty
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.artist.is_none()
			&& self.album.is_none()
			&& self.year.is_none()
			&& self.comment.is_none()
			&& self.track_number.is_none()
			&& self.genre.is_none()
	}
}

impl From<&TagUpdate> for Id3v1Tag {
	fn from(input: &TagUpdate) -> Self {
		let mut tag = Self {
			title: input.title.clone(),
			artist: input.artist.clone(),
			album: input.album.clone(),
			..Self::default()
		};

		if let Some(track_number) = input.track_number {
			tag.set_track(track_number);
		}

		tag
	}
}
