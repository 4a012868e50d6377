use super::constants::{GENRES, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use super::tag::Id3v1Tag;
use crate::error::Result;
use crate::id3::{ID3FindResults, find_id3v1};
use crate::macros::err;
use crate::util::text::latin1_decode;

impl Id3v1Tag {
	/// Parse a 128 byte ID3v1 tag
	///
	/// # Errors
	///
	/// `bytes` doesn't start with `"TAG"`
	pub fn parse(bytes: [u8; ID3V1_TAG_SIZE]) -> Result<Self> {
		if bytes[..3] != ID3V1_TAG_MARKER {
			err!(FakeTag);
		}

		let reader = &bytes[3..];

		let mut tag = Self {
			title: decode_text(&reader[..30]),
			artist: decode_text(&reader[30..60]),
			album: decode_text(&reader[60..90]),
			year: parse_year(&reader[90..94]),
			..Self::default()
		};

		// Determine the range of the comment (30 bytes for ID3v1 and 28 for ID3v1.1)
		// We check for the null terminator 28 bytes in, and for a non-zero track number after it.
		// A track number of 0 is invalid.
		let range = if reader[122] == 0 && reader[123] != 0 {
			tag.track_number = Some(reader[123]);

			94_usize..122
		} else {
			94..124
		};

		tag.comment = decode_text(&reader[range]);

		if usize::from(reader[124]) < GENRES.len() {
			tag.genre = Some(reader[124]);
		}

		Ok(tag)
	}
}

/// Read the ID3v1 tag at the end of `data`, if there is one
///
/// # Examples
///
/// ```rust
/// use tracktag::id3::v1::{Id3v1Tag, read_id3v1, update_id3v1};
///
/// let mut tag = Id3v1Tag::new();
/// tag.title = Some(String::from("Chapter One"));
///
/// let data = update_id3v1(&[0xFF, 0xFB, 0x90, 0x44], &tag);
/// assert_eq!(read_id3v1(&data), Some(tag));
///
/// assert_eq!(read_id3v1(&[0xFF, 0xFB, 0x90, 0x44]), None);
/// ```
pub fn read_id3v1(data: &[u8]) -> Option<Id3v1Tag> {
	let ID3FindResults(_, trailer) = find_id3v1(data);
	Id3v1Tag::parse(*trailer?).ok()
}

fn decode_text(data: &[u8]) -> Option<String> {
	let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
	if data[end..].iter().any(|b| *b != b'\0') {
		log::debug!("ID3v1 text field contains trailing junk, skipping");
	}

	let text = latin1_decode(&data[..end]);
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return None;
	}

	Some(trimmed.to_owned())
}

fn parse_year(input: &[u8]) -> Option<u16> {
	if !input.iter().all(u8::is_ascii_digit) {
		// Most software writes "\0\0\0\0" for an empty year
		if input.iter().any(|b| *b != 0) {
			log::debug!("ID3v1 year field isn't 4 ASCII digits, ignoring");
		}

		return None;
	}

	Some(
		input
			.iter()
			.fold(0_u16, |year, c| year * 10 + u16::from(*c - b'0')),
	)
}
