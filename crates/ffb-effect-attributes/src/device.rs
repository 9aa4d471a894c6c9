//! Device effect profiles: which effect kinds a physical device implements.
//!
//! Profiles are supplied by driver packaging as JSON, for example:
//!
//! ```json
//! { "name": "twin-stick", "effects": ["ConstantForce", "Sine", "Spring"] }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::catalog::EffectKind;
use crate::error::AttributeError;
use crate::table::AttributeTable;

/// Effect kinds implemented by one device, in the order the device lists
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEffectProfile {
    /// Human-readable device label, used only in diagnostics
    pub name: String,
    /// Supported effect kinds, by catalog name
    pub effects: Vec<EffectKind>,
}

impl DeviceEffectProfile {
    /// Create a profile from an explicit kind list.
    pub fn new(name: impl Into<String>, effects: Vec<EffectKind>) -> Self {
        Self {
            name: name.into(),
            effects,
        }
    }

    /// Profile for a device implementing every catalog kind.
    pub fn full_catalog(name: impl Into<String>) -> Self {
        Self::new(name, EffectKind::ALL.to_vec())
    }

    /// Parse a profile from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidProfile`] for malformed JSON or an
    /// effect name outside the catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json).map_err(AttributeError::invalid_profile)?;
        debug!(
            device = %profile.name,
            effects = profile.effects.len(),
            "Loaded device effect profile"
        );
        Ok(profile)
    }

    /// Serialize the profile to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidProfile`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(AttributeError::invalid_profile)
    }

    /// Assemble the attribute table for this device.
    ///
    /// # Errors
    ///
    /// See [`AttributeTable::assemble`].
    pub fn attribute_table(&self) -> Result<AttributeTable> {
        AttributeTable::assemble(&self.effects)
    }
}
