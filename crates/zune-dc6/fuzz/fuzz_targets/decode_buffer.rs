#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = zune_dc6::Dc6Document::from_bytes(data) {
        // anything that decodes must encode, and decode again the same way
        let encoded = document
            .to_bytes()
            .expect("Failed to encode a decoded archive");
        let again = zune_dc6::Dc6Document::from_bytes(&encoded)
            .expect("Failed to decode our own output");
        assert_eq!(again.num_frames(), document.num_frames());
    }
});
