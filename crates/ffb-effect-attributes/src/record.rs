//! The 20-byte `DIEFFECTATTRIBUTES` record.
//!
//! # Memory Layout
//!
//! | Offset | Size | Field            |
//! |--------|------|------------------|
//! | 0      | 4    | `dwEffectId`     |
//! | 4      | 4    | `dwEffType`      |
//! | 8      | 4    | `dwStaticParams` |
//! | 12     | 4    | `dwDynamicParams`|
//! | 16     | 4    | `dwCoords`       |
//!
//! All words are little-endian. Field order is fixed by the host
//! force-feedback subsystem.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::capability::capability_flags;
use crate::catalog::{EffectKind, classify};
use crate::flags::{
    CoordinateFlags, EffectParams, EffectTypeBase, EffectTypeCapabilities, SUPPORTED_COORDINATES,
};
use crate::params::{dynamic_param_flags, static_param_flags};

/// Number of 32-bit words in a record.
pub const RECORD_WORDS: usize = 5;

/// Encoded record length in bytes.
pub const RECORD_LEN: usize = RECORD_WORDS * 4;

/// One effect's attribute record.
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::{AttributeRecord, EffectKind};
///
/// let record = AttributeRecord::encode(EffectKind::ConstantForce);
/// assert_eq!(record.words(), [0x101, 0x8601, 0x3ED, 0x3ED, 0x30]);
///
/// let bytes = record.to_bytes();
/// assert_eq!(bytes[..4], [0x01_u8, 0x01, 0x00, 0x00]);
/// assert_eq!(AttributeRecord::from_bytes(&bytes), record);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Controller effect identity
    pub effect_id: u32,
    /// Base effect type and capability bits
    pub effect_type: u32,
    /// Parameters accepted when the effect is defined
    pub static_params: u32,
    /// Parameters accepted while the effect plays
    pub dynamic_params: u32,
    /// Supported coordinate systems
    pub coordinates: u32,
}

static_assertions::const_assert_eq!(std::mem::size_of::<AttributeRecord>(), RECORD_LEN);
static_assertions::const_assert_eq!(std::mem::align_of::<AttributeRecord>(), 4);

impl AttributeRecord {
    /// Compose the record for a kind.
    #[must_use]
    pub fn encode(kind: EffectKind) -> Self {
        Self {
            effect_id: classify(kind).identity.as_u32(),
            effect_type: capability_flags(kind),
            static_params: static_param_flags(kind).bits(),
            dynamic_params: dynamic_param_flags(kind).bits(),
            coordinates: SUPPORTED_COORDINATES.bits(),
        }
    }

    /// The five words in wire order.
    #[must_use]
    pub const fn words(&self) -> [u32; RECORD_WORDS] {
        [
            self.effect_id,
            self.effect_type,
            self.static_params,
            self.dynamic_params,
            self.coordinates,
        ]
    }

    /// Build a record from five words in wire order.
    #[must_use]
    pub const fn from_words(words: [u32; RECORD_WORDS]) -> Self {
        let [effect_id, effect_type, static_params, dynamic_params, coordinates] = words;
        Self {
            effect_id,
            effect_type,
            static_params,
            dynamic_params,
            coordinates,
        }
    }

    /// Convert to the little-endian wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut bytes = [0u8; RECORD_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Decode from the little-endian wire form.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; RECORD_LEN]) -> Self {
        let mut words = [0u32; RECORD_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            let mut le = [0u8; 4];
            le.copy_from_slice(chunk);
            *word = u32::from_le_bytes(le);
        }
        Self::from_words(words)
    }

    /// Kind named by `effect_id`, if it is in the catalog.
    #[must_use]
    pub fn effect_kind(&self) -> Option<EffectKind> {
        EffectKind::from_identity(self.effect_id)
    }

    /// Enumerated base effect type.
    #[must_use]
    pub const fn effect_type_base(&self) -> Option<EffectTypeBase> {
        EffectTypeBase::from_effect_type(self.effect_type)
    }

    /// Capability bits of `effect_type`.
    #[must_use]
    pub const fn capabilities(&self) -> EffectTypeCapabilities {
        EffectTypeCapabilities::from_bits_truncate(self.effect_type)
    }

    /// Typed static parameter flags.
    #[must_use]
    pub const fn static_param_flags(&self) -> EffectParams {
        EffectParams::from_bits_retain(self.static_params)
    }

    /// Typed dynamic parameter flags.
    #[must_use]
    pub const fn dynamic_param_flags(&self) -> EffectParams {
        EffectParams::from_bits_retain(self.dynamic_params)
    }

    /// Typed coordinate flags.
    #[must_use]
    pub const fn coordinate_flags(&self) -> CoordinateFlags {
        CoordinateFlags::from_bits_retain(self.coordinates)
    }

    /// Whether this record is exactly what [`AttributeRecord::encode`]
    /// produces for its own kind.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.effect_kind()
            .is_some_and(|kind| *self == AttributeRecord::encode(kind))
    }
}

impl From<EffectKind> for AttributeRecord {
    fn from(kind: EffectKind) -> Self {
        AttributeRecord::encode(kind)
    }
}

/// Renders the registry byte dump, e.g.
/// `01 01 00 00|01 86 00 00|ed 03 00 00|ed 03 00 00|30 00 00 00|(ConstantForce)`.
impl fmt::Display for AttributeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.to_bytes().chunks_exact(4) {
            let mut first = true;
            for byte in word {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{byte:02x}")?;
                first = false;
            }
            f.write_str("|")?;
        }
        match self.effect_kind() {
            Some(kind) => write!(f, "({kind})"),
            None => f.write_str("(unknown)"),
        }
    }
}

/// Compose the record for a kind.
#[must_use]
pub fn encode(kind: EffectKind) -> AttributeRecord {
    AttributeRecord::encode(kind)
}
