#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let _ = tracktag::id3::v2::decode_known_fields(&data);
});
