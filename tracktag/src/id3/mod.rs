//! ID3 specific items
//!
//! ID3 has a few versions with specific features. This crate handles two of them:
//!
//! * [ID3v1](v1), the fixed 128 byte trailer at the end of a file
//! * [ID3v2](v2), the variable length tag at the start of a file (version 2.3 only)

pub mod v1;
pub mod v2;

use v1::constants::{ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use v2::{ID3V2_HEADER_SIZE, Id3v2Header};

pub(crate) struct ID3FindResults<Header, Content>(pub Option<Header>, pub Content);

/// Split `data` into its ID3v2 frame block and everything after the tag
///
/// If there's no ID3v2 tag, the frame block is empty and the rest is the entirety of `data`.
/// A tag claiming to be larger than `data` is cut short.
pub(crate) fn find_id3v2(data: &[u8]) -> ID3FindResults<Id3v2Header, (&[u8], &[u8])> {
	let Ok(header) = Id3v2Header::parse(data) else {
		return ID3FindResults(None, (&[], data));
	};

	log::debug!(
		"Found an ID3v2 tag, version: {:?}, revision: {}, flags: 0x{:02x}, size: {}",
		header.version,
		header.revision,
		header.flags,
		header.size
	);

	let mut tag_end = header.tag_end();
	if tag_end > data.len() {
		log::warn!(
			"ID3v2 tag claims a size of {} bytes, but only {} are available",
			header.size,
			data.len() - ID3V2_HEADER_SIZE
		);
		tag_end = data.len();
	}

	ID3FindResults(
		Some(header),
		(&data[ID3V2_HEADER_SIZE..tag_end], &data[tag_end..]),
	)
}

/// Find an ID3v1 tag at the end of `data`
pub(crate) fn find_id3v1(data: &[u8]) -> ID3FindResults<(), Option<&[u8; ID3V1_TAG_SIZE]>> {
	let Some(start) = data.len().checked_sub(ID3V1_TAG_SIZE) else {
		return ID3FindResults(None, None);
	};

	let Ok(trailer) = <&[u8; ID3V1_TAG_SIZE]>::try_from(&data[start..]) else {
		return ID3FindResults(None, None);
	};

	if trailer[..3] != ID3V1_TAG_MARKER {
		return ID3FindResults(None, None);
	}

	log::debug!("Found an ID3v1 tag at offset {start}");
	ID3FindResults(Some(()), Some(trailer))
}
