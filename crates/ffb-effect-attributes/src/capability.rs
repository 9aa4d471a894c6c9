//! Effect-type capability composition (`dwEffType`).
//!
//! `dwEffType = base type | class capability set`. The base type comes from
//! the host API's own enumeration; the capability set is a property of the
//! effect class alone.

use crate::catalog::{CatalogEntry, EffectClass, EffectKind, classify};
use crate::flags::EffectTypeCapabilities as Caps;
use crate::rules::EFFECT_RULES;

/// Capabilities advertised by every non-conditional effect (`86` in the
/// record's second byte).
pub const NON_CONDITIONAL_CAPABILITIES: Caps =
    Caps::ATTACK.union(Caps::FADE).union(Caps::START_DELAY);

/// Capabilities advertised by every conditional effect (`d8` in the
/// record's second byte).
pub const CONDITIONAL_CAPABILITIES: Caps = Caps::SATURATION
    .union(Caps::POS_NEG_COEFFICIENTS)
    .union(Caps::DEADBAND)
    .union(Caps::START_DELAY);

impl EffectClass {
    /// Capability bits for this class.
    #[must_use]
    pub const fn capability_set(self) -> Caps {
        EFFECT_RULES.capability_set(self)
    }

    /// Capability bits this class must never set, whatever the rule table
    /// says.
    ///
    /// Envelope shaping belongs to non-conditional effects. Saturation,
    /// coefficients and deadband belong to conditional ones.
    #[must_use]
    pub const fn forbidden_capabilities(self) -> Caps {
        match self {
            EffectClass::NonConditional => {
                Caps::SATURATION
                    .union(Caps::POS_NEG_COEFFICIENTS)
                    .union(Caps::POS_NEG_SATURATION)
                    .union(Caps::DEADBAND)
            }
            EffectClass::Conditional => Caps::ATTACK.union(Caps::FADE),
        }
    }
}

impl CatalogEntry {
    /// Composed `dwEffType` for this row.
    #[must_use]
    pub const fn effect_type(&self) -> u32 {
        EFFECT_RULES.effect_type(self)
    }
}

/// Composed `dwEffType` for a kind.
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::{EffectKind, capability_flags};
///
/// assert_eq!(capability_flags(EffectKind::ConstantForce), 0x0000_8601);
/// assert_eq!(capability_flags(EffectKind::Friction), 0x0000_D804);
/// ```
#[must_use]
pub const fn capability_flags(kind: EffectKind) -> u32 {
    classify(kind).effect_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::EffectTypeBase;

    #[test]
    fn test_class_capability_values() {
        assert_eq!(NON_CONDITIONAL_CAPABILITIES.bits(), 0x8600);
        assert_eq!(CONDITIONAL_CAPABILITIES.bits(), 0xD800);
    }

    #[test]
    fn test_forbidden_sets_exclude_shared_start_delay() {
        for class in [EffectClass::NonConditional, EffectClass::Conditional] {
            let forbidden = class.forbidden_capabilities();
            assert!(!forbidden.contains(Caps::START_DELAY), "{class:?}");
        }
        let conditional = EffectClass::Conditional.forbidden_capabilities();
        assert_eq!(conditional, Caps::ATTACK | Caps::FADE);
    }

    #[test]
    fn test_shipped_sets_avoid_forbidden_bits() {
        for class in [EffectClass::NonConditional, EffectClass::Conditional] {
            let overlap = class.capability_set() & class.forbidden_capabilities();
            assert!(overlap.is_empty(), "{class:?}");
        }
    }

    #[test]
    fn test_per_kind_effect_type() {
        let expected = [
            (EffectKind::ConstantForce, 0x8601),
            (EffectKind::RampForce, 0x8602),
            (EffectKind::Square, 0x8603),
            (EffectKind::Sine, 0x8603),
            (EffectKind::Triangle, 0x8603),
            (EffectKind::SawtoothUp, 0x8603),
            (EffectKind::SawtoothDown, 0x8603),
            (EffectKind::Spring, 0xD804),
            (EffectKind::Damper, 0xD804),
            (EffectKind::Inertia, 0xD804),
            (EffectKind::Friction, 0xD804),
            (EffectKind::CustomForce, 0x8605),
        ];
        for (kind, effect_type) in expected {
            assert_eq!(capability_flags(kind), effect_type, "{kind}");
        }
    }

    #[test]
    fn test_base_type_matches_class() {
        for kind in EffectKind::ALL {
            let base = EffectTypeBase::from_effect_type(capability_flags(kind));
            let is_condition = base.is_some_and(EffectTypeBase::is_condition);
            assert_eq!(is_condition, kind.class() == EffectClass::Conditional);
        }
    }

    #[test]
    fn test_never_mixes_class_bits() {
        for kind in EffectKind::ALL {
            let caps = Caps::from_bits_truncate(capability_flags(kind));
            let forbidden = kind.class().forbidden_capabilities();
            assert!(caps.intersection(forbidden).is_empty(), "{kind}");
        }
    }
}
