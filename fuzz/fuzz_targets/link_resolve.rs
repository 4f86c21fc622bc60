#![no_main]

use libfuzzer_sys::fuzz_target;
use padlink::{link, SampleName};

fuzz_target!(|data: &[u8]| {
    let fragment = String::from_utf8_lossy(data);

    let _ = link::fragment_params(&fragment);

    // Resolution is infallible: arbitrary fragments fail open to a sample.
    let _ = link::resolve(&fragment, &SampleName::default());
});
