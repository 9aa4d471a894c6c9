//! Per-class composition rules.
//!
//! Every capability and parameter set the composers advertise, keyed by
//! effect class and parameter subclass. Records are composed from
//! [`EFFECT_RULES`]; [`crate::validate_entries_with`] checks a rule table
//! against the flags each class must never set.

use crate::capability::{CONDITIONAL_CAPABILITIES, NON_CONDITIONAL_CAPABILITIES};
use crate::catalog::{CatalogEntry, EffectClass, ParameterSubclass};
use crate::flags::{EffectParams, EffectTypeCapabilities};
use crate::params::{
    COMMON_STATIC_PARAMS, CONDITIONAL_STATIC_PARAMS, CONSTANT_FORCE_STATIC_PARAMS, DYNAMIC_PARAMS,
    EXTENDED_STATIC_PARAMS,
};

/// Class capability sets and class parameter sets.
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::{EFFECT_RULES, EffectClass, ParameterSubclass};
///
/// let caps = EFFECT_RULES.capability_set(EffectClass::Conditional);
/// assert_eq!(caps.bits(), 0xD800);
///
/// let params = EFFECT_RULES.static_params(
///     EffectClass::NonConditional,
///     Some(ParameterSubclass::ExtendedWithSamplePeriod),
/// );
/// assert_eq!(params.bits(), 0x3EF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassRules {
    /// `dwEffType` capabilities of non-conditional effects
    pub non_conditional_capabilities: EffectTypeCapabilities,
    /// `dwEffType` capabilities of conditional effects
    pub conditional_capabilities: EffectTypeCapabilities,
    /// Static parameters of [`ParameterSubclass::ConstantForceLike`]
    pub constant_force_static_params: EffectParams,
    /// Static parameters of [`ParameterSubclass::ExtendedWithSamplePeriod`]
    pub extended_static_params: EffectParams,
    /// Static parameters of conditional effects
    pub conditional_static_params: EffectParams,
    /// Dynamic parameters of every effect, whatever its class
    pub dynamic_params: EffectParams,
}

/// Rules matching the reference hardware.
pub const EFFECT_RULES: ClassRules = ClassRules {
    non_conditional_capabilities: NON_CONDITIONAL_CAPABILITIES,
    conditional_capabilities: CONDITIONAL_CAPABILITIES,
    constant_force_static_params: CONSTANT_FORCE_STATIC_PARAMS,
    extended_static_params: EXTENDED_STATIC_PARAMS,
    conditional_static_params: CONDITIONAL_STATIC_PARAMS,
    dynamic_params: DYNAMIC_PARAMS,
};

impl ClassRules {
    /// Capability set for `class`.
    #[must_use]
    pub const fn capability_set(&self, class: EffectClass) -> EffectTypeCapabilities {
        match class {
            EffectClass::NonConditional => self.non_conditional_capabilities,
            EffectClass::Conditional => self.conditional_capabilities,
        }
    }

    /// Static parameter set for `class` and `subclass`.
    ///
    /// A non-conditional row without a subclass is rejected by
    /// [`crate::validate_catalog`]; it composes to the common set here.
    #[must_use]
    pub const fn static_params(
        &self,
        class: EffectClass,
        subclass: Option<ParameterSubclass>,
    ) -> EffectParams {
        match (class, subclass) {
            (EffectClass::Conditional, _) => self.conditional_static_params,
            (EffectClass::NonConditional, Some(ParameterSubclass::ConstantForceLike)) => {
                self.constant_force_static_params
            }
            (EffectClass::NonConditional, Some(ParameterSubclass::ExtendedWithSamplePeriod)) => {
                self.extended_static_params
            }
            (EffectClass::NonConditional, None) => COMMON_STATIC_PARAMS,
        }
    }

    /// Composed `dwEffType` for a catalog row.
    #[must_use]
    pub const fn effect_type(&self, entry: &CatalogEntry) -> u32 {
        entry.base_type.bits() | self.capability_set(entry.class).bits()
    }

    /// Composed `dwStaticParams` for a catalog row.
    #[must_use]
    pub const fn entry_static_params(&self, entry: &CatalogEntry) -> EffectParams {
        self.static_params(entry.class, entry.subclass)
    }
}

impl Default for ClassRules {
    fn default() -> Self {
        EFFECT_RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EffectKind, classify};

    #[test]
    fn test_default_is_shipped_rules() {
        assert_eq!(ClassRules::default(), EFFECT_RULES);
    }

    #[test]
    fn test_static_params_by_subclass() {
        let constant = Some(ParameterSubclass::ConstantForceLike);
        let non_conditional = EFFECT_RULES.static_params(EffectClass::NonConditional, constant);
        assert_eq!(non_conditional.bits(), 0x3ED);

        let conditional = EFFECT_RULES.static_params(EffectClass::Conditional, None);
        assert_eq!(conditional.bits(), 0x36D);

        let missing = EFFECT_RULES.static_params(EffectClass::NonConditional, None);
        assert_eq!(missing, COMMON_STATIC_PARAMS);
    }

    #[test]
    fn test_conditional_ignores_subclass() {
        let with_subclass = EFFECT_RULES.static_params(
            EffectClass::Conditional,
            Some(ParameterSubclass::ExtendedWithSamplePeriod),
        );
        assert_eq!(with_subclass, EFFECT_RULES.conditional_static_params);
    }

    #[test]
    fn test_effect_type_from_rules() {
        let mut rules = EFFECT_RULES;
        rules.conditional_capabilities = EffectTypeCapabilities::START_DELAY;
        let spring = classify(EffectKind::Spring);
        assert_eq!(rules.effect_type(&spring), 0x8004);
        assert_eq!(EFFECT_RULES.effect_type(&spring), 0xD804);
    }
}
