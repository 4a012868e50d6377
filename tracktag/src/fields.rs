//! The fields this crate reads and writes
//!
//! [`TagFieldSet`] is what comes out of a tag, [`TagUpdate`] is what goes into one.

use crate::id3::v1::Id3v1Tag;
use crate::id3::v2::KnownFrame;

/// The decoded values of the known fields in a tag
///
/// Every field is optional. Empty text is never stored, it is treated as absent.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TagFieldSet {
	/// The track number, without any `/<total>` suffix
	pub track_number: Option<u32>,
	/// The track title
	pub title: Option<String>,
	/// The album title
	pub album: Option<String>,
	/// The lead artist
	pub artist: Option<String>,
}

impl TagFieldSet {
	/// Whether no field has a value
	///
	/// A track number of `0` still counts as a value.
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::fields::TagFieldSet;
	///
	/// let mut fields = TagFieldSet::default();
	/// assert!(fields.is_empty());
	///
	/// fields.track_number = Some(0);
	/// assert!(!fields.is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		self.track_number.is_none()
			&& self.title.is_none()
			&& self.album.is_none()
			&& self.artist.is_none()
	}
}

impl From<&Id3v1Tag> for TagFieldSet {
	fn from(input: &Id3v1Tag) -> Self {
		Self {
			track_number: input.track_number.map(u32::from),
			title: input.title.clone(),
			album: input.album.clone(),
			artist: input.artist.clone(),
		}
	}
}

/// A set of fields to write
///
/// Only the fields that are set are touched. Everything else in the tag, including other known
/// fields, is left as it was.
///
/// # Examples
///
/// ```rust
/// use tracktag::fields::TagUpdate;
///
/// let update = TagUpdate::new().track_number(3).album("MyBook");
/// assert_eq!(update.track_number, Some(3));
/// assert_eq!(update.title, None);
///
/// // Empty text isn't an update
/// let update = TagUpdate::new().title("");
/// assert!(update.is_empty());
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TagUpdate {
	/// The new track number
	pub track_number: Option<u32>,
	/// The new title
	pub title: Option<String>,
	/// The new album
	pub album: Option<String>,
	/// The new artist
	pub artist: Option<String>,
}

impl TagUpdate {
	/// Create an empty `TagUpdate`
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the track number
	pub fn track_number(mut self, track_number: u32) -> Self {
		self.track_number = Some(track_number);
		self
	}

	/// Set the title, ignored if empty
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = non_empty(title.into());
		self
	}

	/// Set the album, ignored if empty
	pub fn album(mut self, album: impl Into<String>) -> Self {
		self.album = non_empty(album.into());
		self
	}

	/// Set the artist, ignored if empty
	pub fn artist(mut self, artist: impl Into<String>) -> Self {
		self.artist = non_empty(artist.into());
		self
	}

	/// Whether this update would change nothing
	pub fn is_empty(&self) -> bool {
		self.frames().next().is_none()
	}

	/// The frames this update writes, in the order they are written
	///
	/// Empty text is skipped, even if it was set directly.
	pub fn frames(&self) -> impl Iterator<Item = (KnownFrame, String)> + '_ {
		KnownFrame::ALL.into_iter().filter_map(|frame| {
			let text = match frame {
				KnownFrame::TrackNumber => return self.track_number.map(|n| (frame, n.to_string())),
				KnownFrame::Title => self.title.as_deref(),
				KnownFrame::Album => self.album.as_deref(),
				KnownFrame::Artist => self.artist.as_deref(),
			};

			text.filter(|text| !text.is_empty())
				.map(|text| (frame, text.to_owned()))
		})
	}
}

fn non_empty(text: String) -> Option<String> {
	Some(text).filter(|text| !text.is_empty())
}
