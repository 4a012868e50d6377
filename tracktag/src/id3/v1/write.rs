use super::constants::{ID3V1_TAG_MARKER, ID3V1_TAG_SIZE, UNKNOWN_GENRE};
use super::tag::Id3v1Tag;
use crate::id3::{ID3FindResults, find_id3v1};
use crate::util::text::latin1_encode;

/// Write `tag` to the end of `data`
///
/// An existing ID3v1 tag is replaced, otherwise a new one is appended.
///
/// # Examples
///
/// ```rust
/// use tracktag::id3::v1::{Id3v1Tag, update_id3v1};
///
/// let audio = [0xFF, 0xFB, 0x90, 0x44];
///
/// let mut tag = Id3v1Tag::new();
/// tag.set_track(3);
///
/// let once = update_id3v1(&audio, &tag);
/// assert_eq!(once.len(), audio.len() + 128);
///
/// // The existing tag is replaced, not appended to
/// let twice = update_id3v1(&once, &tag);
/// assert_eq!(once, twice);
/// ```
pub fn update_id3v1(data: &[u8], tag: &Id3v1Tag) -> Vec<u8> {
	let ID3FindResults(existing, _) = find_id3v1(data);

	let keep = match existing {
		Some(()) => {
			log::debug!("Replacing the existing ID3v1 tag");
			data.len() - ID3V1_TAG_SIZE
		},
		None => data.len(),
	};

	let mut file_bytes = Vec::with_capacity(keep + ID3V1_TAG_SIZE);
	file_bytes.extend_from_slice(&data[..keep]);
	file_bytes.extend_from_slice(&encode(tag));
	file_bytes
}

pub(crate) fn encode(tag: &Id3v1Tag) -> [u8; ID3V1_TAG_SIZE] {
	fn write_text(dest: &mut [u8], value: Option<&str>) {
		let Some(value) = value else {
			return;
		};

		for (slot, b) in dest.iter_mut().zip(latin1_encode(value)) {
			*slot = b;
		}
	}

	let mut writer = [0; ID3V1_TAG_SIZE];
	writer[..3].copy_from_slice(&ID3V1_TAG_MARKER);

	write_text(&mut writer[3..33], tag.title.as_deref());
	write_text(&mut writer[33..63], tag.artist.as_deref());
	write_text(&mut writer[63..93], tag.album.as_deref());

	if let Some(year) = tag.year {
		write_text(&mut writer[93..97], Some(&year.to_string()));
	}

	// ID3v1.1 steals the last 2 bytes of the comment for the track number
	match tag.track_number {
		Some(track_number) => {
			write_text(&mut writer[97..125], tag.comment.as_deref());
			writer[125] = 0;
			writer[126] = track_number;
		},
		None => write_text(&mut writer[97..127], tag.comment.as_deref()),
	}

	writer[127] = tag.genre.unwrap_or(UNKNOWN_GENRE);

	writer
}
