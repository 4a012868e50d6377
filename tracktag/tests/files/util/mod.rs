use tracktag::id3::v2::util::synchsafe::SynchsafeInteger;

use std::path::{Path, PathBuf};

/// A single silent MPEG-1 Layer III frame header, followed by a few bytes of "audio"
pub const AUDIO: &[u8] = &[
	0xFF, 0xFB, 0x90, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Build a raw ID3v2.3 frame
pub fn frame(id: &[u8; 4], content: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend((content.len() as u32).to_be_bytes());
	frame.extend([0, 0]);
	frame.extend(content);
	frame
}

/// Build a UTF-8 text frame
pub fn text_frame(id: &[u8; 4], text: &str) -> Vec<u8> {
	let mut content = vec![3];
	content.extend(text.as_bytes());
	frame(id, &content)
}

/// Build an ID3v2 tag holding `frames`, with `padding` null bytes at the end
pub fn id3v2_tag(major: u8, frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
	let block_len = frames.iter().map(Vec::len).sum::<usize>() + padding;

	let mut tag = vec![b'I', b'D', b'3', major, 0, 0];
	tag.extend((block_len as u32).synch().unwrap().to_be_bytes());
	for frame in frames {
		tag.extend(frame);
	}
	tag.extend(std::iter::repeat_n(0, padding));
	tag
}

/// Split a file into its ID3v2 frame block and everything after it
pub fn split_id3v2(data: &[u8]) -> (&[u8], &[u8]) {
	assert_eq!(&data[..3], b"ID3", "File has no ID3v2 tag");

	let size = u32::from_be_bytes([data[6], data[7], data[8], data[9]]).unsynch() as usize;
	(&data[10..10 + size], &data[10 + size..])
}

/// Whether `needle` appears anywhere in `haystack`
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
	haystack.windows(needle.len()).any(|window| window == needle)
}

pub fn write_file(dir: impl AsRef<Path>, name: &str, contents: &[u8]) -> PathBuf {
	let path = dir.as_ref().join(name);
	std::fs::write(&path, contents).unwrap();
	path
}

/// The names of every file in `dir`, sorted
pub fn file_names(dir: impl AsRef<Path>) -> Vec<String> {
	let mut names = std::fs::read_dir(dir)
		.unwrap()
		.map(|entry| entry.unwrap().file_name().into_string().unwrap())
		.collect::<Vec<_>>();
	names.sort();
	names
}
