#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 2 {
        let width = usize::from(data[0]);
        let height = usize::from(data[1]);
        let indices = zune_dc6::decode_scanlines(&data[2..], width, height);

        assert_eq!(indices.len(), width * height);
    }
});
