//! DirectInput flag families used by the attribute record.
//!
//! All numeric values are the host API's own definitions from `dinput.h`.
//! They are grouped here into typed sets so that the per-class composition
//! rules in [`crate::capability`] and [`crate::params`] read as data.

use bitflags::bitflags;

/// Effect type enumeration carried in the low byte of `dwEffType`.
///
/// This is an enumerated value (`DIEFT_GETTYPE`), not a bit set:
/// `Periodic` is `0x03`, which would alias `ConstantForce | RampForce`
/// if treated as flags.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTypeBase {
    /// `DIEFT_CONSTANTFORCE`
    ConstantForce = 0x01,
    /// `DIEFT_RAMPFORCE`
    RampForce = 0x02,
    /// `DIEFT_PERIODIC`
    Periodic = 0x03,
    /// `DIEFT_CONDITION`
    Condition = 0x04,
    /// `DIEFT_CUSTOMFORCE`
    CustomForce = 0x05,
    /// `DIEFT_HARDWARE`
    Hardware = 0xFF,
}

impl EffectTypeBase {
    /// Mask selecting the enumerated type from a `dwEffType` value.
    pub const MASK: u32 = 0x0000_00FF;

    /// Raw enumeration value as stored in the record.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Extract the enumerated type from a full `dwEffType` value.
    #[must_use]
    pub const fn from_effect_type(effect_type: u32) -> Option<Self> {
        match effect_type & Self::MASK {
            0x01 => Some(Self::ConstantForce),
            0x02 => Some(Self::RampForce),
            0x03 => Some(Self::Periodic),
            0x04 => Some(Self::Condition),
            0x05 => Some(Self::CustomForce),
            0xFF => Some(Self::Hardware),
            _ => None,
        }
    }

    /// Whether this base type belongs to the conditional family.
    #[must_use]
    pub const fn is_condition(self) -> bool {
        matches!(self, Self::Condition)
    }
}

bitflags! {
    /// Qualitative effect-type capabilities (`DIEFT_*` above the type byte).
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EffectTypeCapabilities: u32 {
        /// `DIEFT_FFATTACK`
        const ATTACK               = 0x0000_0200;
        /// `DIEFT_FFFADE`
        const FADE                 = 0x0000_0400;
        /// `DIEFT_SATURATION`
        const SATURATION           = 0x0000_0800;
        /// `DIEFT_POSNEGCOEFFICIENTS`
        const POS_NEG_COEFFICIENTS = 0x0000_1000;
        /// `DIEFT_POSNEGSATURATION`
        const POS_NEG_SATURATION   = 0x0000_2000;
        /// `DIEFT_DEADBAND`
        const DEADBAND             = 0x0000_4000;
        /// `DIEFT_STARTDELAY`
        const START_DELAY          = 0x0000_8000;
    }
}

bitflags! {
    /// Effect parameter flags (`DIEP_*`), used for both static and dynamic
    /// parameter advertisement.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EffectParams: u32 {
        /// `DIEP_DURATION`
        const DURATION                = 0x0000_0001;
        /// `DIEP_SAMPLEPERIOD`
        const SAMPLE_PERIOD           = 0x0000_0002;
        /// `DIEP_GAIN`
        const GAIN                    = 0x0000_0004;
        /// `DIEP_TRIGGERBUTTON`
        const TRIGGER_BUTTON          = 0x0000_0008;
        /// `DIEP_TRIGGERREPEATINTERVAL`
        const TRIGGER_REPEAT_INTERVAL = 0x0000_0010;
        /// `DIEP_AXES`
        const AXES                    = 0x0000_0020;
        /// `DIEP_DIRECTION`
        const DIRECTION               = 0x0000_0040;
        /// `DIEP_ENVELOPE`
        const ENVELOPE                = 0x0000_0080;
        /// `DIEP_TYPESPECIFICPARAMS`
        const TYPE_SPECIFIC_PARAMS    = 0x0000_0100;
        /// `DIEP_STARTDELAY`
        const START_DELAY             = 0x0000_0200;
        /// `DIEP_ALLPARAMS_DX5`: composite mask of every DirectX 5 parameter.
        const ALL_PARAMS_DX5          = 0x0000_01FF;
        /// `DIEP_ALLPARAMS`: composite mask of every parameter bit.
        const ALL_PARAMS              = 0x0000_03FF;
        /// `DIEP_START`
        const START                   = 0x2000_0000;
        /// `DIEP_NORESTART`
        const NO_RESTART              = 0x4000_0000;
        /// `DIEP_NODOWNLOAD`
        const NO_DOWNLOAD             = 0x8000_0000;
    }
}

bitflags! {
    /// Coordinate system flags (`DIEFF_*`).
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CoordinateFlags: u32 {
        /// `DIEFF_OBJECTIDS`
        const OBJECT_IDS     = 0x0000_0001;
        /// `DIEFF_OBJECTOFFSETS`
        const OBJECT_OFFSETS = 0x0000_0002;
        /// `DIEFF_CARTESIAN`
        const CARTESIAN      = 0x0000_0010;
        /// `DIEFF_POLAR`
        const POLAR          = 0x0000_0020;
        /// `DIEFF_SPHERICAL`
        const SPHERICAL      = 0x0000_0040;
    }
}

/// Coordinate systems advertised for every effect. Spherical is never
/// supported by the reference hardware.
pub const SUPPORTED_COORDINATES: CoordinateFlags =
    CoordinateFlags::CARTESIAN.union(CoordinateFlags::POLAR);
