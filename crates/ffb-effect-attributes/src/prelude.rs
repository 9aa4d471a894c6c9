//! Convenience re-exports for building attribute tables.
//!
//! # Example
//!
//! ```
//! use ffb_effect_attributes::prelude::*;
//!
//! let record = encode(EffectKind::Spring);
//! assert_eq!(record.effect_type, 0x0000_D804);
//! ```

pub use crate::Result;
pub use crate::catalog::{EffectClass, EffectKind, ParameterSubclass, classify};
pub use crate::device::DeviceEffectProfile;
pub use crate::error::{AttributeError, CatalogError, ErrorCategory};
pub use crate::flags::{CoordinateFlags, EffectParams, EffectTypeBase, EffectTypeCapabilities};
pub use crate::record::{AttributeRecord, encode};
pub use crate::rules::{ClassRules, EFFECT_RULES};
pub use crate::table::{AttributeTable, assemble};
