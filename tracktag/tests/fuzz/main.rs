#![allow(missing_docs)]

use tracktag::fields::TagUpdate;
use tracktag::file::read_fields_from;
use tracktag::id3::v2::{decode_known_fields, parse_frames, update_id3v2};

use std::thread;
use std::time::{Duration, Instant};

mod id3v2;

/// Run `input` through every parser and the writer, making sure none of them panic or hang
pub fn survives(input: &'static [u8]) {
	let instant = Instant::now();
	let thread = thread::spawn(move || {
		let _ = parse_frames(input);
		let _ = decode_known_fields(input);
		let _ = read_fields_from(input);

		let update = TagUpdate::new().track_number(1).title("Title");
		let once = update_id3v2(input, &update).unwrap();
		let twice = update_id3v2(&once, &update).unwrap();
		assert_eq!(once, twice);
	});

	assert!(thread.join().is_ok());
	assert!(instant.elapsed() < Duration::from_secs(5));
}
