#![no_main]

use libfuzzer_sys::fuzz_target;
use nexrad_data::volume::VolumeFile;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes should only ever produce Ok or Err, never panic.
    let _ = VolumeFile::new(data.to_vec());
});
