#![no_main]
use libfuzzer_sys::fuzz_target;
use polysave::container;

fuzz_target!(|data: &[u8]| {
    let Ok(decompressed) = container::decompress(data) else {
        return;
    };

    let recompressed = container::compress(&decompressed);
    let roundtrip = container::decompress(&recompressed).unwrap();
    assert_eq!(roundtrip, decompressed);
});
