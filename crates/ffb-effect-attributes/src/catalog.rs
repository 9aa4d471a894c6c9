//! Effect catalog: the fixed list of supported effect kinds.
//!
//! Each row maps an [`EffectKind`] to its controller effect identity, its
//! structural class and, for non-conditional effects, its parameter
//! subclass. The table is process-wide constant data; order matters because
//! identities are assigned in catalog order.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttributeError;
use crate::flags::EffectTypeBase;

/// First controller effect identity (`ConstantForce`).
pub const FIRST_EFFECT_ID: u32 = 0x0000_0101;

/// Last controller effect identity (`CustomForce`).
pub const LAST_EFFECT_ID: u32 = 0x0000_010C;

/// Force feedback effect kinds advertised by the device, in catalog order.
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::EffectKind;
///
/// let kind: EffectKind = "Friction".parse()?;
/// assert_eq!(kind, EffectKind::Friction);
/// assert_eq!(kind.identity().as_u32(), 0x0000_010B);
/// # Ok::<(), ffb_effect_attributes::AttributeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    /// Constant force
    ConstantForce,
    /// Linear ramp between two magnitudes
    RampForce,
    /// Periodic square wave
    Square,
    /// Periodic sine wave
    Sine,
    /// Periodic triangle wave
    Triangle,
    /// Periodic rising sawtooth
    SawtoothUp,
    /// Periodic falling sawtooth
    SawtoothDown,
    /// Position-dependent spring condition
    Spring,
    /// Velocity-dependent damper condition
    Damper,
    /// Acceleration-dependent inertia condition
    Inertia,
    /// Movement-opposing friction condition
    Friction,
    /// Custom force from sampled magnitudes
    CustomForce,
}

impl EffectKind {
    /// Number of effect kinds in the catalog.
    pub const COUNT: usize = 12;

    /// Every effect kind, in catalog order.
    pub const ALL: [EffectKind; Self::COUNT] = [
        EffectKind::ConstantForce,
        EffectKind::RampForce,
        EffectKind::Square,
        EffectKind::Sine,
        EffectKind::Triangle,
        EffectKind::SawtoothUp,
        EffectKind::SawtoothDown,
        EffectKind::Spring,
        EffectKind::Damper,
        EffectKind::Inertia,
        EffectKind::Friction,
        EffectKind::CustomForce,
    ];

    /// Position of this kind in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Catalog name, as used in device profiles and registry dumps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EffectKind::ConstantForce => "ConstantForce",
            EffectKind::RampForce => "RampForce",
            EffectKind::Square => "Square",
            EffectKind::Sine => "Sine",
            EffectKind::Triangle => "Triangle",
            EffectKind::SawtoothUp => "SawtoothUp",
            EffectKind::SawtoothDown => "SawtoothDown",
            EffectKind::Spring => "Spring",
            EffectKind::Damper => "Damper",
            EffectKind::Inertia => "Inertia",
            EffectKind::Friction => "Friction",
            EffectKind::CustomForce => "CustomForce",
        }
    }

    /// Controller effect identity for this kind.
    #[must_use]
    pub const fn identity(self) -> EffectIdentity {
        classify(self).identity
    }

    /// Structural class of this kind.
    #[must_use]
    pub const fn class(self) -> EffectClass {
        classify(self).class
    }

    /// Host effect-type enumeration value for this kind.
    #[must_use]
    pub const fn effect_type_base(self) -> EffectTypeBase {
        classify(self).base_type
    }

    /// Look up the kind carrying a controller effect identity.
    #[must_use]
    pub fn from_identity(identity: u32) -> Option<EffectKind> {
        catalog()
            .find(|entry| entry.identity.as_u32() == identity)
            .map(|entry| entry.kind)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AttributeError::unknown_kind_name(s))
    }
}

impl TryFrom<u32> for EffectKind {
    type Error = AttributeError;

    fn try_from(identity: u32) -> Result<Self, Self::Error> {
        EffectKind::from_identity(identity).ok_or(AttributeError::UnknownIdentity(identity))
    }
}

impl TryFrom<EffectIdentity> for EffectKind {
    type Error = AttributeError;

    fn try_from(identity: EffectIdentity) -> Result<Self, Self::Error> {
        EffectKind::try_from(identity.as_u32())
    }
}

/// Controller effect identity (`dwEffectId`).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectIdentity(u32);

impl EffectIdentity {
    /// Wrap a raw identity value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw identity value as stored in the record.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Whether the identity lies in the controller's assigned range.
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.0 >= FIRST_EFFECT_ID && self.0 <= LAST_EFFECT_ID
    }
}

impl fmt::Display for EffectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Structural class of an effect; selects the legal capability and
/// parameter bit sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectClass {
    /// Constant force, ramp, periodic and custom effects
    NonConditional,
    /// Spring, damper, inertia and friction
    Conditional,
}

/// Refinement of [`EffectClass::NonConditional`] for static parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterSubclass {
    /// Accepts an envelope but no sample period.
    ConstantForceLike,
    /// Accepts an envelope and a sample period.
    ExtendedWithSamplePeriod,
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    /// Effect kind described by this row
    pub kind: EffectKind,
    /// Controller effect identity
    pub identity: EffectIdentity,
    /// Structural class
    pub class: EffectClass,
    /// `Some` for non-conditional effects, `None` for conditional ones.
    pub subclass: Option<ParameterSubclass>,
    /// Host effect-type enumeration value
    pub base_type: EffectTypeBase,
}

impl CatalogEntry {
    const fn constant_force_like(
        kind: EffectKind,
        identity: u32,
        base_type: EffectTypeBase,
    ) -> Self {
        Self {
            kind,
            identity: EffectIdentity(identity),
            class: EffectClass::NonConditional,
            subclass: Some(ParameterSubclass::ConstantForceLike),
            base_type,
        }
    }

    const fn extended(kind: EffectKind, identity: u32, base_type: EffectTypeBase) -> Self {
        Self {
            kind,
            identity: EffectIdentity(identity),
            class: EffectClass::NonConditional,
            subclass: Some(ParameterSubclass::ExtendedWithSamplePeriod),
            base_type,
        }
    }

    const fn conditional(kind: EffectKind, identity: u32) -> Self {
        Self {
            kind,
            identity: EffectIdentity(identity),
            class: EffectClass::Conditional,
            subclass: None,
            base_type: EffectTypeBase::Condition,
        }
    }
}

/// Look up a kind's catalog row. Total over every [`EffectKind`].
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::{EffectClass, EffectKind, classify};
///
/// let row = classify(EffectKind::Damper);
/// assert_eq!(row.identity.as_u32(), 0x0000_0109);
/// assert_eq!(row.class, EffectClass::Conditional);
/// assert_eq!(row.subclass, None);
/// ```
#[must_use]
pub const fn classify(kind: EffectKind) -> CatalogEntry {
    use EffectKind as K;
    use EffectTypeBase as T;

    match kind {
        K::ConstantForce => CatalogEntry::constant_force_like(kind, 0x0000_0101, T::ConstantForce),
        K::RampForce => CatalogEntry::extended(kind, 0x0000_0102, T::RampForce),
        K::Square => CatalogEntry::extended(kind, 0x0000_0103, T::Periodic),
        K::Sine => CatalogEntry::extended(kind, 0x0000_0104, T::Periodic),
        K::Triangle => CatalogEntry::extended(kind, 0x0000_0105, T::Periodic),
        K::SawtoothUp => CatalogEntry::extended(kind, 0x0000_0106, T::Periodic),
        K::SawtoothDown => CatalogEntry::extended(kind, 0x0000_0107, T::Periodic),
        K::Spring => CatalogEntry::conditional(kind, 0x0000_0108),
        K::Damper => CatalogEntry::conditional(kind, 0x0000_0109),
        K::Inertia => CatalogEntry::conditional(kind, 0x0000_010A),
        K::Friction => CatalogEntry::conditional(kind, 0x0000_010B),
        K::CustomForce => CatalogEntry::extended(kind, 0x0000_010C, T::CustomForce),
    }
}

const CATALOG_ROWS: [CatalogEntry; EffectKind::COUNT] = [
    classify(EffectKind::ConstantForce),
    classify(EffectKind::RampForce),
    classify(EffectKind::Square),
    classify(EffectKind::Sine),
    classify(EffectKind::Triangle),
    classify(EffectKind::SawtoothUp),
    classify(EffectKind::SawtoothDown),
    classify(EffectKind::Spring),
    classify(EffectKind::Damper),
    classify(EffectKind::Inertia),
    classify(EffectKind::Friction),
    classify(EffectKind::CustomForce),
];

/// Row `n` must describe the kind with discriminant `n`, and every row must
/// describe the kind [`classify`] maps it to.
const fn rows_follow_kind_order(rows: &[CatalogEntry]) -> bool {
    let mut rest = rows;
    let mut position = 0;
    while let [row, tail @ ..] = rest {
        if row.kind.index() != position {
            return false;
        }
        if classify(row.kind).identity.0 != row.identity.0 {
            return false;
        }
        position += 1;
        rest = tail;
    }
    position == EffectKind::COUNT
}

static_assertions::const_assert!(rows_follow_kind_order(&CATALOG_ROWS));

/// The effect catalog, one row per kind in [`EffectKind::ALL`] order.
pub static EFFECT_CATALOG: [CatalogEntry; EffectKind::COUNT] = CATALOG_ROWS;

/// Iterate the catalog rows in order.
pub fn catalog() -> impl Iterator<Item = &'static CatalogEntry> {
    EFFECT_CATALOG.iter()
}
