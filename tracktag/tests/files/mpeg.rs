use crate::util::{AUDIO, contains, frame, id3v2_tag, split_id3v2, text_frame, write_file};

use tracktag::config::WriteOptions;
use tracktag::error::ErrorKind;
use tracktag::fields::TagUpdate;
use tracktag::file::{TagFormat, write_id3v1};
use tracktag::id3::v1::Id3v1Tag;
use tracktag::id3::v2::{FrameId, decode_known_fields, parse_frames};
use tracktag::{read_fields, update_file};

#[test_log::test]
fn update_untagged_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "5.mp3", AUDIO);

	let update = TagUpdate::new().track_number(5).album("Test Album");
	let written = update_file(&path, &update, WriteOptions::default()).unwrap();
	assert_eq!(written, TagFormat::Id3v2);

	let data = std::fs::read(&path).unwrap();
	let (block, audio) = split_id3v2(&data);
	assert_eq!(audio, AUDIO);

	let fields = decode_known_fields(block);
	assert_eq!(fields.track_number, Some(5));
	assert_eq!(fields.album.as_deref(), Some("Test Album"));
	assert_eq!(fields.title, None);

	// No title frame was written at all
	let scan = parse_frames(block);
	assert!(scan.frames().iter().all(|f| f.id() != FrameId::TITLE));
}

#[test_log::test]
fn update_keeps_other_fields() {
	let mut contents = id3v2_tag(
		3,
		&[
			text_frame(b"TIT2", "Original Title"),
			text_frame(b"TALB", "Original Album"),
		],
		0,
	);
	contents.extend(AUDIO);

	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "3.mp3", &contents);

	update_file(&path, &TagUpdate::new().track_number(3), WriteOptions::default()).unwrap();

	let fields = read_fields(&path).unwrap();
	assert_eq!(fields.track_number, Some(3));
	assert_eq!(fields.title.as_deref(), Some("Original Title"));
	assert_eq!(fields.album.as_deref(), Some("Original Album"));
}

#[test_log::test]
fn update_preserves_unknown_frames() {
	let comment = frame(b"COMM", b"\x00engA comment that must survive");
	let private = frame(b"PRIV", b"owner\x00\xDE\xAD\xBE\xEF");

	let mut contents = id3v2_tag(
		3,
		&[comment.clone(), text_frame(b"TRCK", "1"), private.clone()],
		256,
	);
	contents.extend(AUDIO);

	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "2.mp3", &contents);

	update_file(&path, &TagUpdate::new().track_number(2), WriteOptions::default()).unwrap();

	let data = std::fs::read(&path).unwrap();
	let (block, audio) = split_id3v2(&data);
	assert_eq!(audio, AUDIO);
	assert!(contains(block, &comment));
	assert!(contains(block, &private));

	// Padding isn't carried over
	assert_eq!(parse_frames(block).stopped_at(), block.len());
	assert_eq!(decode_known_fields(block).track_number, Some(2));
}

#[test_log::test]
fn update_is_idempotent() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "1.mp3", AUDIO);

	let update = TagUpdate::new()
		.track_number(1)
		.title("Chapter One")
		.artist("Narrator");

	update_file(&path, &update, WriteOptions::default()).unwrap();
	let once = std::fs::read(&path).unwrap();

	update_file(&path, &update, WriteOptions::default()).unwrap();
	let twice = std::fs::read(&path).unwrap();

	assert_eq!(once, twice);
}

#[test_log::test]
fn update_rewrites_other_versions_as_v2_3() {
	let mut contents = id3v2_tag(4, &[text_frame(b"TIT2", "Title")], 0);
	contents.extend(AUDIO);

	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "1.mp3", &contents);

	update_file(&path, &TagUpdate::new().track_number(1), WriteOptions::default()).unwrap();

	let data = std::fs::read(&path).unwrap();
	assert_eq!(&data[..6], b"ID3\x03\x00\x00");

	let fields = read_fields(&path).unwrap();
	assert_eq!(fields.track_number, Some(1));
	assert_eq!(fields.title.as_deref(), Some("Title"));
}

#[test_log::test]
fn update_truncated_tag() {
	// The second frame claims far more data than the tag holds
	let mut second = text_frame(b"TALB", "Album");
	second[4..8].copy_from_slice(&0xFFFF_u32.to_be_bytes());

	let mut contents = id3v2_tag(3, &[text_frame(b"TIT2", "Title"), second], 0);
	contents.extend(AUDIO);

	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "1.mp3", &contents);

	update_file(&path, &TagUpdate::new().track_number(1), WriteOptions::default()).unwrap();

	let fields = read_fields(&path).unwrap();
	assert_eq!(fields.track_number, Some(1));
	assert_eq!(fields.title.as_deref(), Some("Title"));
	assert_eq!(fields.album, None);
}

#[test_log::test]
fn oversized_id3v2_falls_back_to_id3v1() {
	// The frame block is 6 bytes short of the largest size a tag can describe, so any new frame
	// pushes it over
	let private = frame(b"PRIV", &vec![0; 0x0FFF_FFFA - 10]);
	let mut contents = id3v2_tag(3, &[private], 0);
	contents.extend(AUDIO);

	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "7.mp3", &contents);
	let update = TagUpdate::new().track_number(7);

	let strict = WriteOptions::new().id3v1_fallback(false);
	let err = update_file(&path, &update, strict).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));
	assert_eq!(
		std::fs::metadata(&path).unwrap().len(),
		contents.len() as u64
	);

	let written = update_file(&path, &update, WriteOptions::default()).unwrap();
	assert_eq!(written, TagFormat::Id3v1);

	// The ID3v2 tag is untouched, and has none of the known fields
	let data = std::fs::read(&path).unwrap();
	assert_eq!(data.len(), contents.len() + 128);
	assert!(data.starts_with(&contents[..10]));
	assert_eq!(&data[data.len() - 128..data.len() - 125], b"TAG");

	assert_eq!(read_fields(&path).unwrap().track_number, Some(7));
}

#[test_log::test]
fn read_id3v1_fallback() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "1.mp3", AUDIO);

	let mut tag = Id3v1Tag::new();
	tag.title = Some(String::from("Chapter One"));
	write_id3v1(&path, &tag).unwrap();

	let fields = read_fields(&path).unwrap();
	assert_eq!(fields.title.as_deref(), Some("Chapter One"));
	assert_eq!(fields.track_number, None);

	let data = std::fs::read(&path).unwrap();
	assert_eq!(data.len(), AUDIO.len() + 128);
	assert!(data.starts_with(AUDIO));
}

#[test_log::test]
fn id3v1_track_limit() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "300.mp3", AUDIO);

	let mut tag = Id3v1Tag::new();
	tag.set_track(300);
	write_id3v1(&path, &tag).unwrap();

	assert_eq!(read_fields(&path).unwrap().track_number, Some(44));
}

#[test_log::test]
fn id3v2_and_id3v1_coexist() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "1.mp3", AUDIO);

	let mut tag = Id3v1Tag::new();
	tag.title = Some(String::from("Old Title"));
	write_id3v1(&path, &tag).unwrap();

	update_file(&path, &TagUpdate::new().title("New Title"), WriteOptions::default()).unwrap();

	// The ID3v1 tag is still at the end, untouched
	let data = std::fs::read(&path).unwrap();
	assert_eq!(&data[data.len() - 128..data.len() - 125], b"TAG");
	assert_eq!(
		read_fields(&path).unwrap().title.as_deref(),
		Some("New Title")
	);
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.mp3");

	let err = update_file(&path, &TagUpdate::new().track_number(1), WriteOptions::default())
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NotFound(_)));
	assert!(err.to_string().starts_with("File not found: "));

	assert!(read_fields(&path).is_err());
}

#[test_log::test]
fn not_an_mp3() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "cover.jpg", b"\xFF\xD8\xFF");

	let err = read_fields(&path).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedFile(_)));
	assert!(err.to_string().starts_with("Not an MP3 file: "));

	// Directories aren't files, even with the right extension
	let subdir = dir.path().join("chapter.mp3");
	std::fs::create_dir(&subdir).unwrap();
	let err = read_fields(&subdir).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedFile(_)));

	// The file is untouched
	assert_eq!(std::fs::read(&path).unwrap(), b"\xFF\xD8\xFF");
}
