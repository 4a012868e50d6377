//! Utilities for working with synchsafe integers
//!
//! ID3v2 tag sizes are stored using only the lower 7 bits of each byte, so the size can never be
//! mistaken for an MPEG frame sync (`0xFF 0xE0`). Frame sizes in ID3v2.3 are plain big-endian
//! integers and must **not** go through this conversion.

use crate::error::Result;
use crate::macros::err;

/// The largest value a 4 byte synchsafe integer can hold (28 bits)
pub const MAX_SYNCHSAFE_U32: u32 = 0x0FFF_FFFF;

/// Conversion between plain integers and their synchsafe encoding
pub trait SynchsafeInteger: Sized {
	/// Spread the value out over the low 7 bits of each byte
	///
	/// # Errors
	///
	/// The value needs more than 7 bits per byte (above [`MAX_SYNCHSAFE_U32`] for `u32`)
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> tracktag::error::Result<()> {
	/// // 257 = 0b10_0000001, which becomes 0b10_00000001
	/// assert_eq!(257_u32.synch()?, 0x0201);
	///
	/// // 28 bits is the limit
	/// assert!(0x1000_0000_u32.synch().is_err());
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Collapse a synchsafe value back into a plain integer
	///
	/// The high bit of each byte is dropped, whether or not it's set.
	///
	/// # Examples
	///
	/// ```rust
	/// use tracktag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// assert_eq!(0x0201_u32.unsynch(), 257);
	/// assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0x0FFF_FFFF);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > MAX_SYNCHSAFE_U32 {
			err!(TooMuchData);
		}

		let mut synched = 0;
		for byte in 0..4 {
			synched |= ((self >> (byte * 7)) & 0x7F) << (byte * 8);
		}

		Ok(synched)
	}

	fn unsynch(self) -> Self {
		let mut unsynched = 0;
		for byte in 0..4 {
			unsynched |= ((self >> (byte * 8)) & 0x7F) << (byte * 7);
		}

		unsynched
	}
}
