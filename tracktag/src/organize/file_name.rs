use std::sync::LazyLock;

use regex::Regex;

// Leading digits, and an optional title after the first space
static NUMBERED_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^([0-9]+)(?: (.*))?").unwrap());

/// A track number (and maybe a title) taken from a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedName {
	/// The number at the start of the name
	pub track_number: u32,
	/// Everything after the first space, if the name is `<number> <title>`
	pub title: Option<String>,
}

/// Parse a file name (without its extension) that starts with a track number
///
/// Supported forms:
///
/// * `001` → track 1, no title
/// * `001 Book Title` → track 1, title "Book Title"
/// * `001_something` → track 1, no title
///
/// Returns `None` if the name doesn't start with a digit, or the number is too large.
///
/// # Examples
///
/// ```rust
/// use tracktag::organize::parse_file_name;
///
/// let name = parse_file_name("007 The Chapter").unwrap();
/// assert_eq!(name.track_number, 7);
/// assert_eq!(name.title.as_deref(), Some("The Chapter"));
///
/// assert!(parse_file_name("Intro").is_none());
/// ```
pub fn parse_file_name(stem: &str) -> Option<NumberedName> {
	let captures = NUMBERED_NAME.captures(stem)?;

	let digits = captures.get(1)?.as_str();
	let Ok(track_number) = digits.parse() else {
		log::warn!("Track number `{digits}` in `{stem}` is too large, skipping");
		return None;
	};

	let title = captures
		.get(2)
		.filter(|title| !title.as_str().is_empty())
		.map(|title| title.as_str().to_owned());

	Some(NumberedName {
		track_number,
		title,
	})
}
