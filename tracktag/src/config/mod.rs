//! Options for writing tags and organizing directories

mod organize_options;
mod write_options;

pub use organize_options::OrganizeOptions;
pub use write_options::WriteOptions;
