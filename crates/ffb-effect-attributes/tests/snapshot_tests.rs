//! Snapshot tests for the registry dump format.
//!
//! These lock in the exact bytes written for the reference device so that
//! any change to the composition rules shows up as a diff.

use ffb_effect_attributes::*;
use insta::assert_snapshot;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_full_table_dump() -> TestResult {
    let table = AttributeTable::full()?;
    assert_snapshot!("full_table_dump", table.to_string());
    Ok(())
}

#[test]
fn test_constant_force_record_dump() {
    assert_snapshot!(
        encode(EffectKind::ConstantForce).to_string(),
        @"01 01 00 00|01 86 00 00|ed 03 00 00|ed 03 00 00|30 00 00 00|(ConstantForce)"
    );
}

#[test]
fn test_friction_record_dump() {
    assert_snapshot!(
        encode(EffectKind::Friction).to_string(),
        @"0b 01 00 00|04 d8 00 00|6d 03 00 00|ed 03 00 00|30 00 00 00|(Friction)"
    );
}

#[test]
fn test_friction_record_json() -> TestResult {
    let json = serde_json::to_string(&encode(EffectKind::Friction))?;
    assert_snapshot!(
        json,
        @r#"{"effect_id":267,"effect_type":55300,"static_params":877,"dynamic_params":1005,"coordinates":48}"#
    );
    Ok(())
}

#[test]
fn test_parameter_set_values() {
    assert_snapshot!(
        format!(
            "common={:#06x} constant={:#06x} extended={:#06x} conditional={:#06x} dynamic={:#06x}",
            COMMON_STATIC_PARAMS.bits(),
            CONSTANT_FORCE_STATIC_PARAMS.bits(),
            EXTENDED_STATIC_PARAMS.bits(),
            CONDITIONAL_STATIC_PARAMS.bits(),
            DYNAMIC_PARAMS.bits(),
        ),
        @"common=0x036d constant=0x03ed extended=0x03ef conditional=0x036d dynamic=0x03ed"
    );
}

#[test]
fn test_catalog_error_messages() {
    assert_snapshot!(
        CatalogError::IdentityOutOfOrder {
            kind: EffectKind::RampForce,
            actual: EffectIdentity::new(0x101),
            expected: EffectIdentity::new(0x102),
        }
        .to_string(),
        @"Effect kind RampForce has identity 0x00000101, expected 0x00000102 from catalog order"
    );
    assert_snapshot!(
        AttributeError::DuplicateKind {
            kind: EffectKind::Sine,
            first: 1,
            second: 4,
        }
        .to_string(),
        @"Effect kind Sine listed more than once (positions 1 and 4)"
    );
}
