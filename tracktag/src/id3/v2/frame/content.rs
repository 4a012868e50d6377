use super::header::write_header;
use super::{FRAME_HEADER_SIZE, FrameId, KnownFrame, RawFrame};
use crate::error::Result;
use crate::macros::err;
use crate::util::text::{TextEncoding, latin1_decode, utf8_decode};

use byteorder::WriteBytesExt;

/// Encode a text frame
///
/// The text is always written as UTF-8, with no terminator.
///
/// # Errors
///
/// The text is too large to fit in a frame (frame sizes are limited to 32 bits)
///
/// # Examples
///
/// ```rust
/// use tracktag::id3::v2::{KnownFrame, encode_text_frame};
///
/// # fn main() -> tracktag::error::Result<()> {
/// let frame = encode_text_frame(KnownFrame::TrackNumber, "5")?;
/// assert_eq!(frame, b"TRCK\x00\x00\x00\x02\x00\x00\x035");
/// # Ok(()) }
/// ```
pub fn encode_text_frame(frame: KnownFrame, text: &str) -> Result<Vec<u8>> {
	let Ok(size) = u32::try_from(text.len() + 1) else {
		err!(TooMuchData);
	};

	let mut bytes = Vec::with_capacity(FRAME_HEADER_SIZE + size as usize);
	write_header(&mut bytes, frame.id(), size)?;
	bytes.write_u8(TextEncoding::UTF8 as u8)?;
	bytes.extend_from_slice(text.as_bytes());

	Ok(bytes)
}

/// Decode a text frame
///
/// Frames with an encoding byte of `3` are decoded as UTF-8, everything else as Latin-1. Trailing
/// null padding is removed.
///
/// This never fails. A frame with no content, or invalid UTF-8, simply has no value.
///
/// # Examples
///
/// ```rust
/// use tracktag::id3::v2::{FrameId, KnownFrame, RawFrame, decode_text_frame, encode_text_frame};
///
/// # fn main() -> tracktag::error::Result<()> {
/// let encoded = encode_text_frame(KnownFrame::Title, "Chapter One")?;
/// let frame = RawFrame::from_bytes(&encoded).unwrap();
///
/// let (id, text) = decode_text_frame(frame).unwrap();
/// assert_eq!(id, FrameId::TITLE);
/// assert_eq!(text, "Chapter One");
/// # Ok(()) }
/// ```
pub fn decode_text_frame(frame: RawFrame<'_>) -> Option<(FrameId, String)> {
	let content = frame.content();
	let Some((&encoding, text)) = content.split_first() else {
		log::debug!("Frame `{}` has no content", frame.id());
		return None;
	};

	let text = match TextEncoding::from_u8(encoding) {
		TextEncoding::UTF8 => utf8_decode(text)?,
		TextEncoding::Latin1 => latin1_decode(text),
	};

	Some((frame.id(), text))
}
