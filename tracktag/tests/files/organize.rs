use crate::util::{AUDIO, file_names, id3v2_tag, text_frame, write_file};

use tracktag::config::{OrganizeOptions, WriteOptions};
use tracktag::fields::TagUpdate;
use tracktag::organize::{FileStatus, organize_directory, update_directory};
use tracktag::{read_fields, update_file};

#[test_log::test]
fn organize_pads_track_numbers() {
	let dir = tempfile::tempdir().unwrap();
	for name in ["1.mp3", "10.mp3", "100.mp3"] {
		write_file(&dir, name, AUDIO);
	}

	let report = organize_directory(&dir, "MyBook", OrganizeOptions::default()).unwrap();
	assert_eq!(report.processed(), 3);
	assert_eq!(report.renamed(), 3);
	assert_eq!(report.tags_updated(), 3);
	assert_eq!(report.errors(), 0);

	assert_eq!(
		file_names(&dir),
		["001 MyBook.mp3", "010 MyBook.mp3", "100 MyBook.mp3"]
	);

	let fields = read_fields(dir.path().join("010 MyBook.mp3")).unwrap();
	assert_eq!(fields.track_number, Some(10));
	assert_eq!(fields.album.as_deref(), Some("MyBook"));

	let lines = report
		.outcomes()
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>();
	assert_eq!(
		lines,
		[
			"✓ 1.mp3 → Track #1",
			"✓ 10.mp3 → Track #10",
			"✓ 100.mp3 → Track #100",
		]
	);
	assert_eq!(report.outcomes()[0].renamed_to(), Some("001 MyBook.mp3"));
	assert_eq!(report.to_string(), "Processed 3 files, 3 successful");
}

#[test_log::test]
fn organize_twice_changes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	for name in ["1.mp3", "2.mp3"] {
		write_file(&dir, name, AUDIO);
	}

	organize_directory(&dir, "MyBook", OrganizeOptions::default()).unwrap();
	let before = std::fs::read(dir.path().join("001 MyBook.mp3")).unwrap();

	let report = organize_directory(&dir, "MyBook", OrganizeOptions::default()).unwrap();
	assert_eq!(report.processed(), 2);
	assert_eq!(report.renamed(), 0);
	assert_eq!(report.tags_updated(), 0);
	assert!(
		report
			.outcomes()
			.iter()
			.all(|o| matches!(o.status(), FileStatus::AlreadyCorrect))
	);
	assert_eq!(
		report.outcomes()[0].to_string(),
		"✓ Already correct: 001 MyBook.mp3"
	);

	let after = std::fs::read(dir.path().join("001 MyBook.mp3")).unwrap();
	assert_eq!(before, after);
}

#[test_log::test]
fn organize_fixes_tags_of_correctly_named_files() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_file(&dir, "01 MyBook.mp3", AUDIO);
	update_file(
		&path,
		&TagUpdate::new().track_number(1).album("Wrong Book"),
		WriteOptions::default(),
	)
	.unwrap();

	let options = OrganizeOptions::new().pad_width(2);
	let report = organize_directory(&dir, "MyBook", options).unwrap();
	assert_eq!(report.renamed(), 0);
	assert_eq!(report.tags_updated(), 1);

	assert_eq!(
		read_fields(&path).unwrap().album.as_deref(),
		Some("MyBook")
	);
}

#[test_log::test]
fn organize_uses_tags_for_unnumbered_files() {
	let dir = tempfile::tempdir().unwrap();

	let mut contents = id3v2_tag(3, &[text_frame(b"TRCK", "4/10")], 0);
	contents.extend(AUDIO);
	write_file(&dir, "Intro.mp3", &contents);
	write_file(&dir, "2.mp3", AUDIO);
	// Neither a numbered name nor a track number, skipped
	write_file(&dir, "Credits.mp3", AUDIO);

	let report = organize_directory(&dir, "MyBook", OrganizeOptions::default()).unwrap();
	assert_eq!(report.processed(), 2);

	// Processed in track order
	assert_eq!(report.outcomes()[0].file_name(), "2.mp3");
	assert_eq!(report.outcomes()[1].file_name(), "Intro.mp3");

	assert_eq!(
		file_names(&dir),
		["002 MyBook.mp3", "004 MyBook.mp3", "Credits.mp3"]
	);
}

#[test_log::test]
fn organize_with_empty_book_id() {
	let dir = tempfile::tempdir().unwrap();
	write_file(&dir, "7.mp3", AUDIO);

	let report = organize_directory(&dir, "", OrganizeOptions::default()).unwrap();
	assert_eq!(report.errors(), 0);

	let path = dir.path().join("007 .mp3");
	let fields = read_fields(&path).unwrap();
	assert_eq!(fields.track_number, Some(7));
	assert_eq!(fields.album, None);

	// Without an album to compare against, the file is now correct
	let report = organize_directory(&dir, "", OrganizeOptions::default()).unwrap();
	assert_eq!(report.tags_updated(), 0);
	assert_eq!(report.renamed(), 0);
}

#[test_log::test]
fn failed_file_does_not_stop_batch() {
	let dir = tempfile::tempdir().unwrap();
	for name in ["1.mp3", "2.mp3", "3.mp3"] {
		write_file(&dir, name, AUDIO);
	}

	// A corrupt tag is recovered from, not an error
	let mut corrupt = b"ID3\x03\x00\x00\x7F\x7F\x7F\x7FTIT2\xFF\xFF\xFF\xFF".to_vec();
	corrupt.extend(AUDIO);
	write_file(&dir, "4.mp3", &corrupt);

	// "2.mp3" can't be renamed over a directory
	std::fs::create_dir(dir.path().join("002 MyBook.mp3")).unwrap();

	let report = organize_directory(&dir, "MyBook", OrganizeOptions::default()).unwrap();
	assert_eq!(report.processed(), 4);
	assert_eq!(report.successful(), 3);
	assert_eq!(report.errors(), 1);
	assert!(!report.is_success());

	let failed = &report.outcomes()[1];
	assert_eq!(failed.file_name(), "2.mp3");
	assert!(matches!(failed.status(), FileStatus::Failed(_)));
	assert!(failed.to_string().starts_with("✗ 2.mp3: "));
	assert_eq!(failed.renamed_to(), None);

	let fields = read_fields(dir.path().join("004 MyBook.mp3")).unwrap();
	assert_eq!(fields.track_number, Some(4));
	assert_eq!(report.to_string(), "Processed 4 files, 3 successful");
}

#[test_log::test]
fn update_directory_uses_file_names() {
	let dir = tempfile::tempdir().unwrap();
	write_file(&dir, "001 First Chapter.mp3", AUDIO);
	write_file(&dir, "2_second.mp3", AUDIO);
	write_file(&dir, "Intro.mp3", AUDIO);
	write_file(&dir, ".3.mp3", AUDIO);
	write_file(&dir, "4.txt", AUDIO);

	let report = update_directory(&dir, WriteOptions::default()).unwrap();
	assert_eq!(report.processed(), 2);
	assert!(report.is_success());

	let fields = read_fields(dir.path().join("001 First Chapter.mp3")).unwrap();
	assert_eq!(fields.track_number, Some(1));
	assert_eq!(fields.title.as_deref(), Some("First Chapter"));

	let fields = read_fields(dir.path().join("2_second.mp3")).unwrap();
	assert_eq!(fields.track_number, Some(2));
	assert_eq!(fields.title, None);

	// Files are never renamed
	assert_eq!(
		file_names(&dir),
		[".3.mp3", "001 First Chapter.mp3", "2_second.mp3", "4.txt", "Intro.mp3"]
	);

	// Untouched
	assert_eq!(std::fs::read(dir.path().join(".3.mp3")).unwrap(), AUDIO);
	assert_eq!(report.outcomes()[0].to_string(), "✓ 001 First Chapter.mp3 → Track #1");
}
