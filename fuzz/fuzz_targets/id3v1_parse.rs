#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 128]| {
    let _ = tracktag::id3::v1::Id3v1Tag::parse(data);
});
