use super::frame::content::encode_text_frame;
use super::header::create_header;
use super::read::parse_frames;
use crate::error::Result;
use crate::fields::TagUpdate;
use crate::id3::{ID3FindResults, find_id3v2};

use std::io::Write;

/// Build a new ID3v2.3 tag from an existing frame block and a set of updates
///
/// Every frame in `existing_block` that isn't being updated is kept as-is, in its original order.
/// Frames that *are* being updated are removed (including any duplicates), and the new frames are
/// appended after the preserved ones.
///
/// The new tag has no padding, and its size always matches the frames exactly.
///
/// # Errors
///
/// The new tag is too large (ID3v2 tag sizes are limited to 28 bits)
///
/// # Examples
///
/// ```rust
/// use tracktag::fields::TagUpdate;
/// use tracktag::id3::v2::{KnownFrame, build_tag, decode_known_fields, encode_text_frame};
///
/// # fn main() -> tracktag::error::Result<()> {
/// let mut existing = encode_text_frame(KnownFrame::Title, "Original Title")?;
/// existing.extend(encode_text_frame(KnownFrame::TrackNumber, "1")?);
///
/// let tag = build_tag(&existing, &TagUpdate::new().track_number(3))?;
/// assert_eq!(&tag[..6], b"ID3\x03\x00\x00");
///
/// let fields = decode_known_fields(&tag[10..]);
/// assert_eq!(fields.track_number, Some(3));
/// assert_eq!(fields.title.as_deref(), Some("Original Title"));
/// # Ok(()) }
/// ```
pub fn build_tag(existing_block: &[u8], update: &TagUpdate) -> Result<Vec<u8>> {
	let scan = parse_frames(existing_block);
	if scan.is_truncated() {
		log::warn!(
			"Dropping {} unreadable bytes from the existing tag",
			existing_block.len() - scan.stopped_at()
		);
	}

	let replaced = update.frames().map(|(frame, _)| frame.id()).collect::<Vec<_>>();

	let mut frames = Vec::with_capacity(existing_block.len());
	for frame in scan.raw_frames(existing_block) {
		if replaced.contains(&frame.id()) {
			log::debug!("Replacing frame `{}`", frame.id());
			continue;
		}

		frames.write_all(frame.as_bytes())?;
	}

	for (frame, text) in update.frames() {
		log::debug!("Writing frame `{}`: {text:?}", frame.id());
		frames.write_all(&encode_text_frame(frame, &text)?)?;
	}

	let header = create_header(frames.len())?;

	let mut tag = Vec::with_capacity(header.len() + frames.len());
	tag.write_all(&header)?;
	tag.write_all(&frames)?;

	Ok(tag)
}

/// Apply `update` to the ID3v2 tag at the start of `data`
///
/// If `data` has no ID3v2 tag, a new one is created. Everything after the tag is copied through
/// unchanged.
///
/// # Errors
///
/// See [`build_tag`]
///
/// # Examples
///
/// ```rust
/// use tracktag::fields::TagUpdate;
/// use tracktag::id3::v2::update_id3v2;
///
/// # fn main() -> tracktag::error::Result<()> {
/// let audio = [0xFF, 0xFB, 0x90, 0x44];
/// let update = TagUpdate::new().track_number(5);
///
/// let once = update_id3v2(&audio, &update)?;
/// let twice = update_id3v2(&once, &update)?;
///
/// // Updates don't pile up
/// assert_eq!(once, twice);
/// # Ok(()) }
/// ```
pub fn update_id3v2(data: &[u8], update: &TagUpdate) -> Result<Vec<u8>> {
	let ID3FindResults(header, (existing_block, audio)) = find_id3v2(data);
	if header.is_none() {
		log::debug!("No existing ID3v2 tag, creating a new one");
	}

	let tag = build_tag(existing_block, update)?;

	let mut file_bytes = Vec::with_capacity(tag.len() + audio.len());
	file_bytes.write_all(&tag)?;
	file_bytes.write_all(audio)?;

	Ok(file_bytes)
}
