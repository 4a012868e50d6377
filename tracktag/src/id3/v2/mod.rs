//! ID3v2.3 items
//!
//! Only the handful of text frames described by [`KnownFrame`] are decoded. Every other frame is
//! kept as raw bytes, so rewriting a tag never loses data this crate doesn't understand.
//!
//! ## Layout
//!
//! An ID3v2 tag is a 10 byte header followed by a block of frames (and possibly padding):
//!
//! * Header: `"ID3"`, major version, revision, flags, and a 4 byte **synchsafe** size
//! * Frame: 4 byte ID, 4 byte **big-endian** size, 2 flag bytes, then the content
//!
//! Note that frame sizes in ID3v2.3 are *not* synchsafe, unlike the tag size.

mod frame;
mod header;
mod read;
pub mod util;
mod write;

pub use frame::content::{decode_text_frame, encode_text_frame};
pub use frame::{FRAME_HEADER_SIZE, FrameId, FrameSpan, KnownFrame, RawFrame};
pub use header::{ID3V2_HEADER_SIZE, Id3v2Version};
pub use read::{FrameScan, ScanStop, decode_known_fields, parse_frames};
pub use write::{build_tag, update_id3v2};

pub(crate) use header::Id3v2Header;
