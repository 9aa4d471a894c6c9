//! DirectInput force feedback effect attribute table.
//!
//! An OEM force feedback joystick driver advertises, per supported effect,
//! a 20-byte `DIEFFECTATTRIBUTES` record under the device's
//! `OemForceFeedback\Effects` configuration key. The host force feedback
//! subsystem reads these records to learn each effect's identity, type,
//! accepted parameters and coordinate systems. The layout here reproduces
//! the reference vendor install bit for bit.
//!
//! # Architecture
//!
//! - [`catalog`]: the fixed effect kinds, their identities and classes
//! - [`flags`]: the host API's effect type, parameter and coordinate flags
//! - [`capability`]: `dwEffType` composition per class
//! - [`params`]: `dwStaticParams` / `dwDynamicParams` composition
//! - [`rules`]: the per-class capability and parameter table
//! - [`record`]: the 20-byte little-endian record codec
//! - [`table`]: ordered table assembly for a device's supported kinds
//! - [`validate`]: definition-time catalog validation
//! - [`device`]: JSON device effect profiles
//!
//! Everything is pure and stateless; tables can be computed concurrently
//! from any thread with identical results.
//!
//! # Example
//!
//! ```
//! use ffb_effect_attributes::prelude::*;
//!
//! let table = AttributeTable::assemble(&[EffectKind::ConstantForce, EffectKind::Friction])?;
//! assert_eq!(
//!     table.to_string(),
//!     "01 01 00 00|01 86 00 00|ed 03 00 00|ed 03 00 00|30 00 00 00|(ConstantForce)\n\
//!      0b 01 00 00|04 d8 00 00|6d 03 00 00|ed 03 00 00|30 00 00 00|(Friction)"
//! );
//! # Ok::<(), AttributeError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod capability;
pub mod catalog;
pub mod device;
pub mod error;
pub mod flags;
pub mod params;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod table;
pub mod validate;

pub use capability::{CONDITIONAL_CAPABILITIES, NON_CONDITIONAL_CAPABILITIES, capability_flags};
pub use catalog::{
    CatalogEntry, EFFECT_CATALOG, EffectClass, EffectIdentity, EffectKind, ParameterSubclass,
    catalog, classify,
};
pub use device::DeviceEffectProfile;
pub use error::{AttributeError, CatalogError, ErrorCategory};
pub use flags::{
    CoordinateFlags, EffectParams, EffectTypeBase, EffectTypeCapabilities, SUPPORTED_COORDINATES,
};
pub use params::{
    COMMON_STATIC_PARAMS, CONDITIONAL_STATIC_PARAMS, CONSTANT_FORCE_STATIC_PARAMS, DYNAMIC_PARAMS,
    EXTENDED_STATIC_PARAMS, dynamic_param_flags, static_param_flags,
};
pub use record::{AttributeRecord, RECORD_LEN, RECORD_WORDS, encode};
pub use rules::{ClassRules, EFFECT_RULES};
pub use table::{AttributeTable, assemble};
pub use validate::{validate_catalog, validate_coordinates, validate_entries, validate_entries_with};

/// A specialized `Result` type for attribute table operations.
pub type Result<T> = std::result::Result<T, AttributeError>;
