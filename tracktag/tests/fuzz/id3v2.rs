use crate::survives;

#[test_log::test]
fn empty() {
	survives(b"");
}

#[test_log::test]
fn header_only() {
	survives(b"ID3");
	survives(b"ID3\x03\x00\x00\x00\x00\x00");
	survives(b"ID3\x03\x00\x00\x00\x00\x00\x00");
}

#[test_log::test]
fn tag_size_past_end() {
	survives(b"ID3\x03\x00\x00\x7F\x7F\x7F\x7F");
	survives(b"ID3\x03\x00\x00\xFF\xFF\xFF\xFFTIT2\x00\x00\x00\x02\x00\x00\x03a");
}

#[test_log::test]
fn frame_size_overflow() {
	// A frame size of u32::MAX, which would overflow a naive offset calculation
	survives(b"ID3\x03\x00\x00\x00\x00\x00\x14TIT2\xFF\xFF\xFF\xFF\x00\x00\x03aaaaaaaaa");
}

#[test_log::test]
fn frame_header_without_content() {
	survives(b"ID3\x03\x00\x00\x00\x00\x00\x0ATRCK\x00\x00\x00\x01\x00\x00");
}

#[test_log::test]
fn text_without_encoding() {
	survives(b"ID3\x03\x00\x00\x00\x00\x00\x0BTRCK\x00\x00\x00\x01\x00\x00\x03");
	survives(b"ID3\x03\x00\x00\x00\x00\x00\x0BTRCK\x00\x00\x00\x01\x00\x00\x09");
}

#[test_log::test]
fn invalid_utf8_track() {
	survives(b"ID3\x03\x00\x00\x00\x00\x00\x0DTRCK\x00\x00\x00\x03\x00\x00\x03\xC3\x28");
}

#[test_log::test]
fn only_id3v1_marker() {
	survives(b"TAG");
	survives(&[b'T'; 128]);
}
