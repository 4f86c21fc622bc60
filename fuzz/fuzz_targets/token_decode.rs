#![no_main]

use libfuzzer_sys::fuzz_target;
use padlink::codec;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary input either decodes or fails cleanly; never panics.
    if let Ok(decoded) = codec::decode(text) {
        let token = codec::encode(&decoded);
        assert_eq!(
            codec::decode(&token).expect("re-encoded token must decode"),
            decoded
        );
    }

    // Every text is encodable and round-trips exactly.
    let token = codec::encode(text);
    assert_eq!(codec::decode(&token).expect("round trip"), text);
});
