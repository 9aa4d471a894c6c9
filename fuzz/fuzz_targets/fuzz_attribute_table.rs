//! Fuzzes decoding of stored attribute table buffers.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_attribute_table
#![no_main]
use ffb_effect_attributes::AttributeTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected, panics are not.
    if let Ok(table) = AttributeTable::from_bytes(data) {
        assert_eq!(table.to_bytes(), data);
    }
});
