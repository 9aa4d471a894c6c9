//! Fuzzes device effect profile parsing and table assembly.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_device_profile
#![no_main]
use ffb_effect_attributes::DeviceEffectProfile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(profile) = DeviceEffectProfile::from_json(text) {
        if let Ok(table) = profile.attribute_table() {
            assert_eq!(table.len(), profile.effects.len());
        }
    }
});
