use super::{FRAME_HEADER_SIZE, FrameId};
use crate::id3::v2::read::ScanStop;

use std::io::Write;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FrameHeader {
	pub(crate) id: FrameId,
	/// Content size, **not** including the header
	pub(crate) size: u32,
	pub(crate) flags: u16,
}

/// Parse an ID3v2.3 frame header from the start of `bytes`
///
/// This only validates the header itself, checking the size against the
/// remaining data is up to the caller.
pub(crate) fn parse_header(bytes: &[u8]) -> Result<FrameHeader, ScanStop> {
	if bytes.len() < FRAME_HEADER_SIZE {
		return Err(ScanStop::Truncated);
	}

	let id_bytes = [bytes[0], bytes[1], bytes[2], bytes[3]];

	// Assume we just started reading padding
	if id_bytes == [0; 4] {
		return Err(ScanStop::Padding);
	}

	let Some(id) = FrameId::new(id_bytes) else {
		log::warn!("Encountered an invalid frame ID: 0x{id_bytes:x?}");
		return Err(ScanStop::BadFrameId);
	};

	// ID3v2.3 frame sizes are plain big-endian integers, unlike the tag size
	let size = BigEndian::read_u32(&bytes[4..8]);
	let flags = BigEndian::read_u16(&bytes[8..10]);

	Ok(FrameHeader { id, size, flags })
}

pub(crate) fn write_header<W>(writer: &mut W, id: FrameId, size: u32) -> std::io::Result<()>
where
	W: Write,
{
	writer.write_all(id.as_bytes())?;
	writer.write_u32::<BigEndian>(size)?;
	// No compression, encryption, or grouping
	writer.write_u16::<BigEndian>(0)?;

	Ok(())
}
