//! Unit tests against the reference vendor install.
//!
//! The expected byte dumps were captured from the original joystick driver's
//! `OemForceFeedback\Effects` registry values. If any assertion fails the
//! table no longer matches real hardware.

use ffb_effect_attributes::*;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

const CONSTANT_FORCE_BYTES: [u8; 20] = [
    0x01, 0x01, 0x00, 0x00, 0x01, 0x86, 0x00, 0x00, 0xed, 0x03, 0x00, 0x00, 0xed, 0x03, 0x00, 0x00,
    0x30, 0x00, 0x00, 0x00,
];

const FRICTION_BYTES: [u8; 20] = [
    0x0b, 0x01, 0x00, 0x00, 0x04, 0xd8, 0x00, 0x00, 0x6d, 0x03, 0x00, 0x00, 0xed, 0x03, 0x00, 0x00,
    0x30, 0x00, 0x00, 0x00,
];

mod reference_records {
    use super::*;

    #[test]
    fn test_constant_force_words() {
        assert_eq!(
            encode(EffectKind::ConstantForce).words(),
            [
                0x0000_0101,
                0x0000_8601,
                0x0000_03ed,
                0x0000_03ed,
                0x0000_0030,
            ]
        );
    }

    #[test]
    fn test_constant_force_bytes() {
        let bytes = encode(EffectKind::ConstantForce).to_bytes();
        assert_eq!(bytes, CONSTANT_FORCE_BYTES);
    }

    #[test]
    fn test_friction_words() {
        assert_eq!(
            encode(EffectKind::Friction).words(),
            [
                0x0000_010b,
                0x0000_d804,
                0x0000_036d,
                0x0000_03ed,
                0x0000_0030,
            ]
        );
    }

    #[test]
    fn test_friction_bytes() {
        assert_eq!(encode(EffectKind::Friction).to_bytes(), FRICTION_BYTES);
    }

    #[test]
    fn test_constant_force_then_friction_buffer() -> TestResult {
        let table = assemble(&[EffectKind::ConstantForce, EffectKind::Friction])?;
        let bytes = table.to_bytes();
        assert_eq!(bytes.len(), 40);

        let expected = (CONSTANT_FORCE_BYTES.as_slice(), FRICTION_BYTES.as_slice());
        assert_eq!(bytes.split_at_checked(RECORD_LEN), Some(expected));
        Ok(())
    }

    #[test]
    fn test_decoding_reference_dump() -> TestResult {
        let mut dump = CONSTANT_FORCE_BYTES.to_vec();
        dump.extend_from_slice(&FRICTION_BYTES);
        let table = AttributeTable::from_bytes(&dump)?;
        assert_eq!(
            table.kinds().collect::<Vec<_>>(),
            vec![EffectKind::ConstantForce, EffectKind::Friction]
        );
        assert!(table.records().iter().all(AttributeRecord::is_canonical));
        Ok(())
    }
}

mod catalog_invariants {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identities_distinct_and_in_range() {
        let ids: HashSet<u32> = EffectKind::ALL
            .iter()
            .map(|kind| kind.identity().as_u32())
            .collect();
        assert_eq!(ids.len(), EffectKind::COUNT);
        assert!(ids.iter().all(|id| (0x0000_0101..=0x0000_010c).contains(id)));
    }

    #[test]
    fn test_effect_type_base_matches_class() {
        for kind in EffectKind::ALL {
            let record = encode(kind);
            let base = record.effect_type_base();
            let caps = record.capabilities();
            match kind.class() {
                EffectClass::Conditional => {
                    assert_eq!(base, Some(EffectTypeBase::Condition), "{kind}");
                    assert_eq!(caps, CONDITIONAL_CAPABILITIES, "{kind}");
                }
                EffectClass::NonConditional => {
                    assert_ne!(base, Some(EffectTypeBase::Condition), "{kind}");
                    assert_eq!(caps, NON_CONDITIONAL_CAPABILITIES, "{kind}");
                }
            }
        }
    }

    #[test]
    fn test_coordinates_fixed() {
        for kind in EffectKind::ALL {
            assert_eq!(encode(kind).coordinates, 0x0000_0030, "{kind}");
        }
    }

    #[test]
    fn test_dynamic_params_equal_constant_force_static() {
        let reference = encode(EffectKind::ConstantForce).static_params;
        for kind in EffectKind::ALL {
            assert_eq!(encode(kind).dynamic_params, reference, "{kind}");
        }
    }

    #[test]
    fn test_catalog_validates() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn test_rules_with_forbidden_flags_rejected() {
        let envelope_on_conditions = ClassRules {
            conditional_static_params: CONDITIONAL_STATIC_PARAMS | EffectParams::ENVELOPE,
            ..EFFECT_RULES
        };
        let saturation_on_periodics = ClassRules {
            non_conditional_capabilities: NON_CONDITIONAL_CAPABILITIES
                | EffectTypeCapabilities::SATURATION,
            ..EFFECT_RULES
        };
        let per_class_dynamics = ClassRules {
            dynamic_params: CONDITIONAL_STATIC_PARAMS,
            ..EFFECT_RULES
        };

        for rules in [
            envelope_on_conditions,
            saturation_on_periodics,
            per_class_dynamics,
        ] {
            let err = validate_entries_with(&rules, &EFFECT_CATALOG).err();
            let err = err.map(AttributeError::from);
            assert_eq!(
                err.map(|e| e.category()),
                Some(ErrorCategory::Definition),
                "{rules:?}"
            );
        }
    }
}

mod error_handling {
    use super::*;

    #[test]
    fn test_empty_request_is_invalid_input() {
        let err = assemble(&[]).err();
        assert_eq!(err, Some(AttributeError::EmptyKindList));
        assert_eq!(err.map(|e| e.category()), Some(ErrorCategory::InvalidInput));
    }

    #[test]
    fn test_duplicate_request_is_invalid_input() {
        let err = assemble(&[EffectKind::Sine, EffectKind::Sine]).err();
        assert!(err.is_some_and(|e| e.is_invalid_input()));
    }

    #[test]
    fn test_unknown_kind_name_is_invalid_input() {
        let err = "Vibration".parse::<EffectKind>().err();
        assert_eq!(
            err,
            Some(AttributeError::UnknownKindName("Vibration".to_string()))
        );
    }
}

mod concurrency {
    use super::*;

    fn full_table_bytes() -> Result<Vec<u8>> {
        Ok(AttributeTable::full()?.to_bytes())
    }

    #[test]
    fn test_concurrent_assembly_is_identical() -> TestResult {
        let expected = full_table_bytes()?;
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(full_table_bytes))
            .collect();
        for handle in handles {
            let bytes = handle
                .join()
                .map_err(|panic| format!("assembly thread panicked: {panic:?}"))??;
            assert_eq!(bytes, expected);
        }
        Ok(())
    }
}

mod logging {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Shared sink for formatted subscriber output.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut bytes = self
                .0
                .lock()
                .map_err(|e| io::Error::other(e.to_string()))?;
            bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, log.contents())
    }

    #[test]
    fn test_duplicate_rejection_logs_warning() {
        let (result, output) = capture(|| assemble(&[EffectKind::Damper, EffectKind::Damper]));
        assert!(matches!(result, Err(AttributeError::DuplicateKind { .. })));
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("duplicate effect kind"), "{output}");
        assert!(output.contains("kind=Damper"), "{output}");
    }

    #[test]
    fn test_empty_rejection_logs_warning() {
        let (result, output) = capture(|| assemble(&[]));
        assert_eq!(result, Err(AttributeError::EmptyKindList));
        assert!(output.contains("no effect kinds"), "{output}");
    }

    #[test]
    fn test_assembly_logs_record_count() {
        let (result, output) = capture(|| assemble(&[EffectKind::Sine, EffectKind::Spring]));
        assert_eq!(result.map(|table| table.len()), Ok(2));
        assert!(output.contains("Assembled effect attribute table"), "{output}");
        assert!(output.contains("kinds=2"), "{output}");
        assert!(output.contains("bytes=40"), "{output}");
    }
}
