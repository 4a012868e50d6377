pub(crate) mod content;
pub(crate) mod header;

use std::fmt::{Display, Formatter};
use std::ops::Range;

/// The size of an ID3v2.3 frame header
pub const FRAME_HEADER_SIZE: usize = 10;

/// A 4 character ID3v2.3 frame identifier
///
/// Every byte must be printable ASCII (`0x20..=0x7E`). This is looser than the ID3v2 standard
/// (which only allows `A-Z` and `0-9`) so that oddly named frames written by other software survive
/// a rewrite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId([u8; 4]);

impl FrameId {
	/// Track number (`TRCK`)
	pub const TRACK_NUMBER: Self = Self(*b"TRCK");
	/// Track title (`TIT2`)
	pub const TITLE: Self = Self(*b"TIT2");
	/// Album title (`TALB`)
	pub const ALBUM: Self = Self(*b"TALB");
	/// Lead artist (`TPE1`)
	pub const ARTIST: Self = Self(*b"TPE1");

	/// Attempt to create a `FrameId` from 4 bytes
	///
	/// Returns `None` if any byte is outside of `0x20..=0x7E`.
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v2::FrameId;
	///
	/// assert_eq!(FrameId::new(*b"TRCK"), Some(FrameId::TRACK_NUMBER));
	/// assert!(FrameId::new(*b"COMM").is_some());
	/// assert!(FrameId::new([0, 0, 0, 0]).is_none());
	/// ```
	pub fn new(id: [u8; 4]) -> Option<Self> {
		if Self::is_valid(&id) {
			return Some(Self(id));
		}

		None
	}

	/// Whether every byte of `id` is printable ASCII
	pub fn is_valid(id: &[u8]) -> bool {
		id.iter().all(|b| (0x20..=0x7E).contains(b))
	}

	/// The raw identifier bytes
	pub fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}

	/// The identifier as a string
	pub fn as_str(&self) -> &str {
		// Always ASCII, checked in `FrameId::new`
		std::str::from_utf8(&self.0).unwrap_or_default()
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The frames this crate knows how to decode and write
///
/// Every other frame is treated as opaque bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KnownFrame {
	/// `TRCK`, a track number optionally followed by `/<total>`
	TrackNumber,
	/// `TIT2`
	Title,
	/// `TALB`
	Album,
	/// `TPE1`
	Artist,
}

impl KnownFrame {
	/// All known frames, in the order they are written
	pub const ALL: [Self; 4] = [Self::TrackNumber, Self::Title, Self::Album, Self::Artist];

	/// The [`FrameId`] this frame is stored under
	pub fn id(self) -> FrameId {
		match self {
			Self::TrackNumber => FrameId::TRACK_NUMBER,
			Self::Title => FrameId::TITLE,
			Self::Album => FrameId::ALBUM,
			Self::Artist => FrameId::ARTIST,
		}
	}

	/// Find the `KnownFrame` for a [`FrameId`], if there is one
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v2::{FrameId, KnownFrame};
	///
	/// assert_eq!(KnownFrame::from_id(FrameId::ALBUM), Some(KnownFrame::Album));
	/// assert_eq!(KnownFrame::from_id(FrameId::new(*b"COMM").unwrap()), None);
	/// ```
	pub fn from_id(id: FrameId) -> Option<Self> {
		Self::ALL.into_iter().find(|known| known.id() == id)
	}
}

/// The location of a single frame within a frame block
///
/// Spans are cheap to copy around. To get at the frame itself, see [`FrameSpan::slice`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSpan {
	pub(crate) id: FrameId,
	pub(crate) offset: usize,
	/// Header + content
	pub(crate) len: usize,
}

impl FrameSpan {
	/// The frame's identifier
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// The range of the entire frame (header + content) within the frame block
	pub fn range(&self) -> Range<usize> {
		self.offset..self.offset + self.len
	}

	/// The range of the frame's content within the frame block
	pub fn content_range(&self) -> Range<usize> {
		self.offset + FRAME_HEADER_SIZE..self.offset + self.len
	}

	/// Borrow the frame out of the block it was parsed from
	///
	/// # Panics
	///
	/// `block` isn't the frame block this span was parsed from, and is too short.
	pub fn slice<'a>(&self, block: &'a [u8]) -> RawFrame<'a> {
		RawFrame {
			id: self.id,
			bytes: &block[self.range()],
		}
	}
}

/// A complete, undecoded ID3v2 frame (header + content)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawFrame<'a> {
	pub(crate) id: FrameId,
	pub(crate) bytes: &'a [u8],
}

impl<'a> RawFrame<'a> {
	/// View `bytes` as a single, complete frame
	///
	/// Returns `None` if `bytes` doesn't start with a valid frame header, or if the size in the
	/// header doesn't match the length of `bytes`.
	pub fn from_bytes(bytes: &'a [u8]) -> Option<Self> {
		let header = header::parse_header(bytes).ok()?;
		if FRAME_HEADER_SIZE + header.size as usize != bytes.len() {
			return None;
		}

		Some(Self { id: header.id, bytes })
	}

	/// The frame's identifier
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// The entire frame, including its header
	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// The frame's content, without the header
	pub fn content(&self) -> &'a [u8] {
		self.bytes.get(FRAME_HEADER_SIZE..).unwrap_or_default()
	}
}
