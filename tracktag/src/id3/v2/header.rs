use super::util::synchsafe::SynchsafeInteger;
use crate::error::Result;
use crate::macros::err;

use byteorder::{BigEndian, ByteOrder};

/// The size of an ID3v2 tag header
pub const ID3V2_HEADER_SIZE: usize = 10;

pub(crate) const ID3V2_TAG_MARKER: [u8; 3] = *b"ID3";

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3, the only version this crate writes
	V3,
	/// ID3v2.4
	V4,
	/// Anything else
	Unknown(u8),
}

impl Id3v2Version {
	fn from_major(major: u8) -> Self {
		match major {
			2 => Self::V2,
			3 => Self::V3,
			4 => Self::V4,
			_ => Self::Unknown(major),
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub revision: u8,
	/// Not interpreted, extended headers and unsynchronisation are not supported
	pub flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub size: u32,
}

impl Id3v2Header {
	pub(crate) fn parse(bytes: &[u8]) -> Result<Self> {
		log::debug!("Parsing ID3v2 header");

		if bytes.len() < ID3V2_HEADER_SIZE || bytes[..3] != ID3V2_TAG_MARKER {
			err!(FakeTag);
		}

		let version = Id3v2Version::from_major(bytes[3]);
		if version != Id3v2Version::V3 {
			log::warn!(
				"Found an ID3v2 tag with version {version:?}, it will be treated as ID3v2.3"
			);
		}

		let flags = bytes[5];
		if flags != 0 {
			log::debug!("Ignoring ID3v2 tag flags: 0x{flags:02x}");
		}

		let raw_size = BigEndian::read_u32(&bytes[6..10]);
		if raw_size & 0x8080_8080 != 0 {
			log::warn!("ID3v2 tag size isn't synchsafe, ignoring the high bit of each byte");
		}

		Ok(Self {
			version,
			revision: bytes[4],
			flags,
			size: raw_size.unsynch(),
		})
	}

	/// The offset of the first byte after the tag
	pub(crate) fn tag_end(&self) -> usize {
		self.size as usize + ID3V2_HEADER_SIZE
	}
}

/// Create an ID3v2.3 tag header for a frame block of `size` bytes
pub(crate) fn create_header(size: usize) -> Result<[u8; ID3V2_HEADER_SIZE]> {
	let Ok(size) = u32::try_from(size) else {
		err!(TooMuchData);
	};

	let mut header = [0; ID3V2_HEADER_SIZE];
	header[..3].copy_from_slice(&ID3V2_TAG_MARKER);
	// Major version, revision 0
	header[3] = 3;
	header[4] = 0;
	// No flags
	header[5] = 0;
	BigEndian::write_u32(&mut header[6..], size.synch()?);

	Ok(header)
}
