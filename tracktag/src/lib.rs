//! Renumber and re-tag numbered MP3 files.
//!
//! At its core, this crate is a small, self-contained ID3 codec. It can read and rewrite the
//! handful of fields that matter when putting an audiobook (or any numbered set of files) in
//! order, while leaving every other frame in the file untouched.
//!
//! # Supported tags
//!
//! * ID3v2.3 text frames: `TRCK`, `TIT2`, `TALB`, `TPE1`. All other frames are carried
//!   through byte-for-byte.
//! * ID3v1 and ID3v1.1 (128 byte trailer).
//!
//! # Examples
//!
//! ## Updating a tag in memory
//!
//! ```rust
//! # fn main() -> tracktag::error::Result<()> {
//! use tracktag::fields::TagUpdate;
//! use tracktag::id3::v2::{decode_known_fields, update_id3v2};
//!
//! // Some MPEG audio with no tag at all
//! let audio = [0xFF, 0xFB, 0x90, 0x44, 0x00, 0x00];
//!
//! let update = TagUpdate::new().track_number(5).album("Test Album");
//! let tagged = update_id3v2(&audio, &update)?;
//!
//! // The audio is copied through unchanged
//! assert!(tagged.ends_with(&audio));
//!
//! let fields = decode_known_fields(&tagged[10..tagged.len() - audio.len()]);
//! assert_eq!(fields.track_number, Some(5));
//! assert_eq!(fields.album.as_deref(), Some("Test Album"));
//! assert_eq!(fields.title, None);
//! # Ok(()) }
//! ```
//!
//! ## Updating a file
//!
//! ```rust,no_run
//! # fn main() -> tracktag::error::Result<()> {
//! use tracktag::config::WriteOptions;
//! use tracktag::fields::TagUpdate;
//!
//! let update = TagUpdate::new().track_number(3);
//! tracktag::update_file("3.mp3", &update, WriteOptions::default())?;
//!
//! // Other fields, such as the title, are left alone
//! let fields = tracktag::read_fields("3.mp3")?;
//! assert_eq!(fields.track_number, Some(3));
//! # Ok(()) }
//! ```
//!
//! ## Organizing a directory
//!
//! ```rust,no_run
//! # fn main() -> tracktag::error::Result<()> {
//! use tracktag::config::OrganizeOptions;
//! use tracktag::organize::organize_directory;
//!
//! // "1.mp3" becomes "001 MyBook.mp3", with a track number of 1 and an album of "MyBook"
//! let report = organize_directory("chapters/", "MyBook", OrganizeOptions::default())?;
//! for outcome in report.outcomes() {
//! 	println!("{outcome}");
//! }
//!
//! println!("{report}");
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod file;
pub mod id3;
pub(crate) mod macros;
pub mod organize;
mod util;

pub use crate::file::{read_fields, update_file};

pub use util::text::TextEncoding;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use tracktag::prelude::*;
	//! ```

	pub use crate::config::{OrganizeOptions, WriteOptions};
	pub use crate::fields::{TagFieldSet, TagUpdate};
	pub use crate::file::TagFormat;
}
