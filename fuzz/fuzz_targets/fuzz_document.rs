#![no_main]
use libfuzzer_sys::fuzz_target;
use polysave::SaveDocument;

fuzz_target!(|data: &[u8]| {
    let Ok(document) = SaveDocument::from_slice(data) else {
        return;
    };

    // Boolean bytes other than 0 and 1 are normalized, so compare the
    // re-encoded output against itself rather than the input
    let encoded = document.to_bytes().unwrap();
    assert_eq!(encoded.len(), data.len());

    let reparsed = SaveDocument::from_slice(&encoded).unwrap();
    assert_eq!(reparsed.to_bytes().unwrap(), encoded);

    #[cfg(feature = "json")]
    {
        let json = polysave::json::SaveJson::from_document(&document);
        let _ = json.to_string_pretty();
    }
});
