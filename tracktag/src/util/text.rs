/// How the text of an ID3v2 text frame is encoded
///
/// Only [`TextEncoding::UTF8`] is ever written. UTF-16 text is not supported, and is read as
/// Latin-1 like any other unknown encoding.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1, encoding byte `0`
	Latin1 = 0,
	/// UTF-8, encoding byte `3`
	UTF8 = 3,
}

impl TextEncoding {
	/// Interpret a frame's encoding byte
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8(3), TextEncoding::UTF8);
	/// assert_eq!(TextEncoding::from_u8(0), TextEncoding::Latin1);
	///
	/// // Everything else falls back to Latin-1
	/// assert_eq!(TextEncoding::from_u8(1), TextEncoding::Latin1);
	/// ```
	pub fn from_u8(byte: u8) -> Self {
		if byte == Self::UTF8 as u8 {
			return Self::UTF8;
		}

		if byte != Self::Latin1 as u8 {
			log::debug!("Reading text with encoding byte {byte} as Latin-1");
		}

		Self::Latin1
	}
}

/// Decode Latin-1 text, without any trailing nulls
pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |pos| pos + 1);
	bytes[..end].iter().copied().map(char::from).collect()
}

/// Encode `s` as Latin-1, dropping any character that can't be represented
pub(crate) fn latin1_encode(s: &str) -> impl Iterator<Item = u8> + '_ {
	s.chars().filter_map(|c| match u8::try_from(c) {
		Ok(b) => Some(b),
		Err(_) => {
			log::warn!("Dropping character {c:?}, it can't be represented in Latin-1");
			None
		},
	})
}

/// Decode UTF-8 text, without any trailing nulls
///
/// Invalid UTF-8 is logged and gives `None`.
pub(crate) fn utf8_decode(bytes: &[u8]) -> Option<String> {
	match std::str::from_utf8(bytes) {
		Ok(text) => Some(text.trim_end_matches('\0').to_owned()),
		Err(e) => {
			log::warn!("Invalid UTF-8 text: {e}");
			None
		},
	}
}
