//! Error types for attribute table construction.
//!
//! Two classes of failure exist. [`CatalogError`] reports a definition-time
//! inconsistency in the static effect catalog; no table may be produced
//! while one is present. Every other [`AttributeError`] variant is a
//! caller-input violation and carries no partial output.

use crate::catalog::{EffectIdentity, EffectKind};

/// Definition-time inconsistency in the effect catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A kind has no catalog row
    #[error("Effect kind {0} has no catalog entry")]
    MissingEntry(EffectKind),

    /// A kind has more than one catalog row
    #[error("Effect kind {0} has more than one catalog entry")]
    DuplicateEntry(EffectKind),

    /// Identity outside the controller's assigned range
    #[error("Effect kind {kind} has identity {identity} outside [0x00000101, 0x0000010c]")]
    IdentityOutOfRange {
        /// Offending kind
        kind: EffectKind,
        /// Its identity
        identity: EffectIdentity,
    },

    /// Identity not assigned in catalog order
    #[error("Effect kind {kind} has identity {actual}, expected {expected} from catalog order")]
    IdentityOutOfOrder {
        /// Offending kind
        kind: EffectKind,
        /// Identity in the catalog
        actual: EffectIdentity,
        /// Identity implied by catalog position
        expected: EffectIdentity,
    },

    /// Two rows share an identity
    #[error("Effect identity {0} is assigned more than once")]
    DuplicateIdentity(EffectIdentity),

    /// Non-conditional without subclass, or conditional with one
    #[error("Effect kind {0} has a parameter subclass inconsistent with its class")]
    SubclassMismatch(EffectKind),

    /// Base effect type does not belong to the kind's class
    #[error("Effect kind {0} has a base effect type inconsistent with its class")]
    BaseTypeMismatch(EffectKind),

    /// Capability bits from the other class were composed in
    #[error("Effect kind {kind} sets capability bits {bits:#06x} forbidden for its class")]
    ForbiddenCapability {
        /// Offending kind
        kind: EffectKind,
        /// Forbidden bits that were set
        bits: u32,
    },

    /// Static parameter bits forbidden for the kind's class or subclass
    #[error("Effect kind {kind} sets static parameter bits {bits:#06x} forbidden for its class")]
    ForbiddenStaticParam {
        /// Offending kind
        kind: EffectKind,
        /// Forbidden bits that were set
        bits: u32,
    },

    /// Dynamic parameters differ from the constant-force static set
    #[error("Effect kind {0} reports dynamic parameters different from ConstantForce")]
    DynamicParamsDiverge(EffectKind),

    /// Coordinates other than Cartesian | Polar
    #[error("Coordinate flags {0:#04x} are not Cartesian | Polar")]
    UnsupportedCoordinates(u32),
}

/// Coarse classification of an [`AttributeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller supplied an unusable kind list or buffer
    InvalidInput,
    /// The static catalog itself is inconsistent
    Definition,
}

/// Errors returned while assembling or decoding an attribute table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// No effect kinds were supplied
    #[error("Supported effect list is empty")]
    EmptyKindList,

    /// The same kind appears twice
    #[error("Effect kind {kind} listed more than once (positions {first} and {second})")]
    DuplicateKind {
        /// Repeated kind
        kind: EffectKind,
        /// Position of the first occurrence
        first: usize,
        /// Position of the repeat
        second: usize,
    },

    /// Identity not present in the catalog
    #[error("Effect identity {0:#010x} is not in the effect catalog")]
    UnknownIdentity(u32),

    /// Name not present in the catalog
    #[error("Effect kind name '{0}' is not in the effect catalog")]
    UnknownKindName(String),

    /// Buffer length is not a whole number of records
    #[error("Attribute buffer of {len} bytes is not a multiple of 20-byte records")]
    MisalignedBuffer {
        /// Buffer length in bytes
        len: usize,
    },

    /// Device effect profile could not be parsed
    #[error("Invalid device effect profile: {0}")]
    InvalidProfile(String),

    /// Static catalog failed validation
    #[error("Effect catalog is inconsistent: {0}")]
    Catalog(#[from] CatalogError),
}

impl AttributeError {
    /// Classify the error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AttributeError::Catalog(_) => ErrorCategory::Definition,
            AttributeError::EmptyKindList
            | AttributeError::DuplicateKind { .. }
            | AttributeError::UnknownIdentity(_)
            | AttributeError::UnknownKindName(_)
            | AttributeError::MisalignedBuffer { .. }
            | AttributeError::InvalidProfile(_) => ErrorCategory::InvalidInput,
        }
    }

    /// Whether the caller can fix this by supplying different input.
    pub fn is_invalid_input(&self) -> bool {
        self.category() == ErrorCategory::InvalidInput
    }

    /// Create an unknown kind name error.
    pub fn unknown_kind_name(name: impl Into<String>) -> Self {
        AttributeError::UnknownKindName(name.into())
    }

    /// Create an invalid profile error with context.
    pub fn invalid_profile(context: impl core::fmt::Display) -> Self {
        AttributeError::InvalidProfile(context.to_string())
    }
}
