//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! See also: [`Id3v1Tag`]
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte ranging from 0 to 255. Only the first 80 entries are
//! known here, see [`GENRES`]. Anything else (conventionally 255) means there's no genre.
//!
//! ## Track numbers
//!
//! ID3v1.1 stores the track number in the last byte of the comment, preceded by a null byte. The
//! track number is limited to 1-255.

pub(crate) mod constants;
mod read;
mod tag;
mod write;

pub use constants::{GENRES, ID3V1_TAG_SIZE};
pub use read::read_id3v1;
pub use tag::Id3v1Tag;
pub use write::update_id3v1;
