//! Static and dynamic parameter composition (`dwStaticParams`,
//! `dwDynamicParams`).
//!
//! Static parameters depend on the effect class and, for non-conditional
//! effects, on the parameter subclass:
//!
//! | Parameter set             | Value   | Adds to common            |
//! |---------------------------|---------|---------------------------|
//! | Conditional               | `0x36D` | nothing                   |
//! | ConstantForceLike         | `0x3ED` | envelope                  |
//! | ExtendedWithSamplePeriod  | `0x3EF` | envelope, sample period   |
//!
//! Dynamic parameters are the ConstantForceLike set for every kind. The
//! reference hardware reports the same dynamic set for all effects,
//! conditional ones included, and this table reproduces that.
//!
//! `DIEP_ALLPARAMS_DX5` / `DIEP_ALLPARAMS` are composite masks in the host
//! API. They bound the advertised sets (every set is contained in
//! `ALL_PARAMS`) but are not OR-ed in, since that would also advertise
//! sample period and trigger repeat interval, which the hardware does not.

use crate::catalog::{CatalogEntry, EffectClass, EffectKind, ParameterSubclass, classify};
use crate::flags::EffectParams as P;
use crate::rules::EFFECT_RULES;

/// Parameters every effect accepts when defined.
pub const COMMON_STATIC_PARAMS: P = P::DURATION
    .union(P::GAIN)
    .union(P::TRIGGER_BUTTON)
    .union(P::AXES)
    .union(P::DIRECTION)
    .union(P::TYPE_SPECIFIC_PARAMS)
    .union(P::START_DELAY);

/// Static parameters of a constant-force-like effect.
pub const CONSTANT_FORCE_STATIC_PARAMS: P = COMMON_STATIC_PARAMS.union(P::ENVELOPE);

/// Static parameters of ramp, periodic and custom effects.
pub const EXTENDED_STATIC_PARAMS: P = CONSTANT_FORCE_STATIC_PARAMS.union(P::SAMPLE_PERIOD);

/// Static parameters of conditional effects.
pub const CONDITIONAL_STATIC_PARAMS: P = COMMON_STATIC_PARAMS;

/// Dynamic parameters, identical for every effect kind.
pub const DYNAMIC_PARAMS: P = CONSTANT_FORCE_STATIC_PARAMS;

impl ParameterSubclass {
    /// Static parameter set for this subclass.
    #[must_use]
    pub const fn static_params(self) -> P {
        EFFECT_RULES.static_params(EffectClass::NonConditional, Some(self))
    }

    /// Static parameter bits this subclass must never set.
    #[must_use]
    pub const fn forbidden_static_params(self) -> P {
        match self {
            ParameterSubclass::ConstantForceLike => P::SAMPLE_PERIOD,
            ParameterSubclass::ExtendedWithSamplePeriod => P::empty(),
        }
    }
}

impl EffectClass {
    /// Static parameter bits this class must never set.
    #[must_use]
    pub const fn forbidden_static_params(self) -> P {
        match self {
            EffectClass::NonConditional => P::empty(),
            EffectClass::Conditional => P::ENVELOPE.union(P::SAMPLE_PERIOD),
        }
    }
}

impl CatalogEntry {
    /// Composed `dwStaticParams` for this row.
    #[must_use]
    pub const fn static_params(&self) -> P {
        EFFECT_RULES.entry_static_params(self)
    }

    /// Composed `dwDynamicParams` for this row.
    #[must_use]
    pub const fn dynamic_params(&self) -> P {
        EFFECT_RULES.dynamic_params
    }
}

/// Composed `dwStaticParams` for a kind.
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::{EffectKind, static_param_flags};
///
/// assert_eq!(static_param_flags(EffectKind::ConstantForce).bits(), 0x3ED);
/// assert_eq!(static_param_flags(EffectKind::Sine).bits(), 0x3EF);
/// assert_eq!(static_param_flags(EffectKind::Friction).bits(), 0x36D);
/// ```
#[must_use]
pub const fn static_param_flags(kind: EffectKind) -> P {
    classify(kind).static_params()
}

/// Composed `dwDynamicParams` for a kind. Independent of the kind.
#[must_use]
pub const fn dynamic_param_flags(kind: EffectKind) -> P {
    classify(kind).dynamic_params()
}
