use super::frame::content::decode_text_frame;
use super::frame::header::parse_header;
use super::frame::{FRAME_HEADER_SIZE, FrameSpan, KnownFrame, RawFrame};
use crate::fields::TagFieldSet;

/// Why a frame scan stopped
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanStop {
	/// The entire block was consumed
	End,
	/// Reached a run of null bytes
	Padding,
	/// A frame ID contained a byte outside of `0x20..=0x7E`
	BadFrameId,
	/// A frame had a size of 0, or a size larger than the remaining data
	BadFrameSize,
	/// There were leftover bytes, too few to hold a frame
	Truncated,
}

/// The result of [`parse_frames`]
///
/// This holds the valid prefix of the frame block, and where (and why) the scan stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameScan {
	pub(crate) frames: Vec<FrameSpan>,
	pub(crate) stopped_at: usize,
	pub(crate) stop: ScanStop,
}

impl FrameScan {
	/// The frames that were successfully parsed, in their original order
	pub fn frames(&self) -> &[FrameSpan] {
		&self.frames
	}

	/// The offset into the block where scanning stopped
	///
	/// Everything from this offset onwards is either padding or unreadable.
	pub fn stopped_at(&self) -> usize {
		self.stopped_at
	}

	/// Why the scan stopped
	pub fn stop_reason(&self) -> ScanStop {
		self.stop
	}

	/// Whether the scan stopped due to bad data, rather than reaching the end or padding
	pub fn is_truncated(&self) -> bool {
		!matches!(self.stop, ScanStop::End | ScanStop::Padding)
	}

	/// Borrow every parsed frame out of `block`
	///
	/// `block` must be the same frame block passed to [`parse_frames`].
	pub fn raw_frames<'a>(&'a self, block: &'a [u8]) -> impl Iterator<Item = RawFrame<'a>> + 'a {
		self.frames.iter().map(move |span| span.slice(block))
	}
}

/// Scan an ID3v2.3 frame block (the tag, without its 10 byte header)
///
/// This is a tolerant parser, and never fails. Scanning stops at the first sign of padding or
/// invalid data, and everything before that point is kept.
///
/// # Examples
///
/// ```rust
/// use tracktag::id3::v2::{FrameId, KnownFrame, ScanStop, encode_text_frame, parse_frames};
///
/// # fn main() -> tracktag::error::Result<()> {
/// let mut block = encode_text_frame(KnownFrame::TrackNumber, "1")?;
/// // A frame claiming to be much larger than the data available
/// block.extend_from_slice(b"TIT2\x00\x00\x10\x00\x00\x00\x03Oops");
///
/// let scan = parse_frames(&block);
/// assert_eq!(scan.frames().len(), 1);
/// assert_eq!(scan.frames()[0].id(), FrameId::TRACK_NUMBER);
/// assert_eq!(scan.stop_reason(), ScanStop::BadFrameSize);
/// # Ok(()) }
/// ```
pub fn parse_frames(block: &[u8]) -> FrameScan {
	log::debug!("Scanning ID3v2 frame block, size: {}", block.len());

	let mut frames = Vec::new();
	let mut offset = 0;

	let stop = loop {
		let remaining = block.len() - offset;
		if remaining == 0 {
			break ScanStop::End;
		}

		// A frame needs at least one byte of content
		if remaining <= FRAME_HEADER_SIZE {
			log::debug!("{remaining} trailing bytes can't hold a frame, stopping");
			break ScanStop::Truncated;
		}

		let header = match parse_header(&block[offset..]) {
			Ok(header) => header,
			Err(stop) => break stop,
		};

		let size = header.size as usize;
		if size == 0 || size > remaining - FRAME_HEADER_SIZE {
			log::warn!(
				"Frame `{}` at offset {offset} has an invalid size ({size}), stopping",
				header.id
			);
			break ScanStop::BadFrameSize;
		}

		if header.flags != 0 {
			log::debug!(
				"Frame `{}` has flags set (0x{:04x}), keeping it as-is",
				header.id,
				header.flags
			);
		}

		log::trace!("Found frame `{}`, size: {size}", header.id);

		let len = FRAME_HEADER_SIZE + size;
		frames.push(FrameSpan {
			id: header.id,
			offset,
			len,
		});

		offset += len;
	};

	log::debug!(
		"Scan stopped at offset {offset} ({stop:?}), found {} frames",
		frames.len()
	);

	FrameScan {
		frames,
		stopped_at: offset,
		stop,
	}
}

/// Decode the known text frames in an ID3v2.3 frame block
///
/// This uses the same scan as [`parse_frames`], so it never fails either. Fields with no value,
/// empty text, or invalid text are left as `None`.
///
/// Only the part of `TRCK` before the first `/` is used as the track number.
///
/// # Examples
///
/// ```rust
/// use tracktag::id3::v2::{KnownFrame, decode_known_fields, encode_text_frame};
///
/// # fn main() -> tracktag::error::Result<()> {
/// let mut block = encode_text_frame(KnownFrame::TrackNumber, "3/12")?;
/// block.extend(encode_text_frame(KnownFrame::Artist, "Some Narrator")?);
///
/// let fields = decode_known_fields(&block);
/// assert_eq!(fields.track_number, Some(3));
/// assert_eq!(fields.artist.as_deref(), Some("Some Narrator"));
/// assert_eq!(fields.title, None);
/// # Ok(()) }
/// ```
pub fn decode_known_fields(block: &[u8]) -> TagFieldSet {
	let mut fields = TagFieldSet::default();

	let scan = parse_frames(block);
	for frame in scan.raw_frames(block) {
		let Some(known) = KnownFrame::from_id(frame.id()) else {
			continue;
		};

		let Some((id, text)) = decode_text_frame(frame) else {
			continue;
		};

		let text = Some(text).filter(|text| !text.is_empty());
		let previous_was_set = match known {
			KnownFrame::TrackNumber => {
				let track_number = text.as_deref().and_then(parse_track_number);
				std::mem::replace(&mut fields.track_number, track_number).is_some()
			},
			KnownFrame::Title => std::mem::replace(&mut fields.title, text).is_some(),
			KnownFrame::Album => std::mem::replace(&mut fields.album, text).is_some(),
			KnownFrame::Artist => std::mem::replace(&mut fields.artist, text).is_some(),
		};

		if previous_was_set {
			log::warn!("Found a duplicate `{id}` frame, using the last one");
		}
	}

	fields
}

/// Parse a `TRCK` value, such as "3" or "3/12"
fn parse_track_number(text: &str) -> Option<u32> {
	let numerator = text.split('/').next().unwrap_or_default().trim();
	match numerator.parse() {
		Ok(track_number) => Some(track_number),
		Err(_) => {
			log::warn!("Track number `{text}` isn't numeric, ignoring");
			None
		},
	}
}
