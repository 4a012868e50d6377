#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let scan = tracktag::id3::v2::parse_frames(&data);
    assert!(scan.stopped_at() <= data.len());

    // Every span must lie within the block, in order, without overlapping
    let mut end = 0;
    for span in scan.frames() {
        assert_eq!(span.range().start, end);
        end = span.range().end;
    }
    assert_eq!(end, scan.stopped_at());
});
