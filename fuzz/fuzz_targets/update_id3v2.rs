#![no_main]

use libfuzzer_sys::fuzz_target;
use tracktag::fields::TagUpdate;

fuzz_target!(|data: Vec<u8>| {
    let update = TagUpdate::new().track_number(7).title("Fuzzed");

    let Ok(once) = tracktag::id3::v2::update_id3v2(&data, &update) else {
        return;
    };

    // A second update of our own output must change nothing
    let twice = tracktag::id3::v2::update_id3v2(&once, &update).unwrap();
    assert_eq!(once, twice);
});
