//! Batch operations over a directory of numbered MP3 files
//!
//! * [`update_directory`] sets each file's track number from its name.
//! * [`organize_directory`] renames every file to `<track> <book>.mp3`, and sets its track number
//!   and album to match.
//!
//! Both return a [`BatchReport`], with one [`FileOutcome`] per file.

mod batch;
mod file_name;
mod report;

pub use batch::{organize_directory, update_directory};
pub use file_name::{NumberedName, parse_file_name};
pub use report::{BatchReport, FileOutcome, FileStatus};
